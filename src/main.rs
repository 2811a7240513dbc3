/*
 * Copyright 2021 Constantin A.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::env::args;
use std::process::exit;

use emoji_catalog::catalog::catalog::EmojiCatalog;
use emoji_catalog::catalog::errors::CatalogError;
use emoji_catalog::records::sprite::SpriteSize;

fn main() {
    env_logger::init();

    let mut args = args();
    args.next();
    let command = args
        .next()
        .expect("You need to specify a command (validate|search|show|categories)");

    match command.as_str() {
        "validate" => {
            let path = args.next().expect("You need to specify a catalog file");
            match EmojiCatalog::from_file(&path) {
                Ok(catalog) => println!("{}: {} records, all invariants hold", path, catalog.len()),
                Err(CatalogError::Validation(errors)) => {
                    for error in &errors {
                        eprintln!("{:?}", error);
                    }
                    eprintln!("{}: {} invariant violations", path, errors.len());
                    exit(1);
                }
                Err(err) => {
                    eprintln!("Failed to load {}: {:?}", path, err);
                    exit(1);
                }
            }
        }
        "search" => {
            let query = args.next().expect("You need to specify a search query");
            let catalog = load(args.next());
            for record in catalog.search(&query) {
                println!(
                    "{}\t{}\t{}\t({})",
                    record.number,
                    record.display_emoji(),
                    record,
                    record.sequence_string()
                );
            }
        }
        "show" => {
            let number = args.next().expect("You need to specify a record number");
            let catalog = load(args.next());
            match catalog.get_by_number(&number) {
                Some(record) => {
                    println!(
                        "{} {} [{}] {} / {}",
                        record.display_emoji(),
                        record,
                        record.sequence_string(),
                        record.main_category,
                        record.sub_category
                    );
                    for size in &SpriteSize::ALL {
                        let clip = record.clip(*size);
                        println!(
                            "{}:\t{} ({}x{}) @ {},{} {}x{}",
                            size,
                            clip.source,
                            clip.sheet_width,
                            clip.sheet_height,
                            clip.x,
                            clip.y,
                            clip.w,
                            clip.h
                        );
                    }
                }
                None => {
                    eprintln!("No record with number {}", number);
                    exit(1);
                }
            }
        }
        "categories" => {
            let catalog = load(args.next());
            for group in catalog.group_by_category() {
                println!("{}", group.main_category);
                for sub_group in &group.sub_groups {
                    println!("  {}", sub_group.sub_category);
                    for record in &sub_group.records {
                        println!("    {} {}", record.display_emoji(), record);
                    }
                }
            }
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            exit(1);
        }
    }
}

/// Loads the catalog at `path` or falls back to the bundled one.
fn load(path: Option<String>) -> EmojiCatalog {
    match path {
        Some(path) => EmojiCatalog::from_file(&path)
            .unwrap_or_else(|err| panic!("Failed to load {}: {:?}", path, err)),
        None => EmojiCatalog::bundled().clone(),
    }
}

/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
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
//! The catalog container: an ordered list of [EmojiRecord]s with lookup
//! indices, loaded from (and serialized back to) schema-validated JSON.
//!
//! The catalog order is curated (it is the order an emoji picker displays),
//! so iteration, search results and category groups all preserve it.

use std::collections::HashMap;
use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use itertools::Itertools;
use regex::Regex;

use crate::catalog::errors::CatalogError;
use crate::catalog::prototype::EmojiRecordPrototype;
use crate::catalog::validation;
use crate::records::record::EmojiRecord;
use crate::records::sprite::{SpriteClip, SpriteSize};

/// The default catalog shipped with the crate.
const BUNDLED_JSON: &str = include_str!("../../data/emoji_catalog.json");

lazy_static! {
    static ref BUNDLED: EmojiCatalog = EmojiCatalog::from_json_str(BUNDLED_JSON)
        .expect("The bundled catalog data is well-formed");
}

/// An ordered, immutable collection of emoji descriptors.
///
/// Loading parses the JSON wire format, resolves the hex codepoint sequences
/// and validates the shape invariants (see [crate::catalog::validation]);
/// afterwards the catalog is read-only.
#[derive(Debug, Clone)]
pub struct EmojiCatalog {
    records: Vec<EmojiRecord>,
    numbers: HashMap<String, usize>,
    sequences: HashMap<Vec<u32>, usize>,
    names: HashMap<String, usize>,
}

/// All records of one `mainCategory`, split by `subCategory`.
/// Both levels and the records themselves keep catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    pub main_category: &'a str,
    pub sub_groups: Vec<SubCategoryGroup<'a>>,
}

/// All records of one `subCategory` within a [CategoryGroup].
#[derive(Debug, Clone, PartialEq)]
pub struct SubCategoryGroup<'a> {
    pub sub_category: &'a str,
    pub records: Vec<&'a EmojiRecord>,
}

impl EmojiCatalog {
    /// Returns the catalog bundled with the crate.
    ///
    /// It is parsed and validated on first use and shared afterwards.
    /// # Examples
    /// ```
    /// use emoji_catalog::catalog::catalog::EmojiCatalog;
    ///
    /// let catalog = EmojiCatalog::bundled();
    ///
    /// assert!(!catalog.is_empty());
    /// assert_eq!(catalog.get_by_number("1").unwrap().short_name, "grinning face");
    /// ```
    pub fn bundled() -> &'static EmojiCatalog {
        &BUNDLED
    }

    /// Builds a catalog from already-typed records, indexing and validating
    /// them. This is what all the loading functions bottom out in.
    pub fn from_records(records: Vec<EmojiRecord>) -> Result<EmojiCatalog, CatalogError> {
        let errors = validation::validate(&records);
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let numbers = records
            .iter()
            .enumerate()
            .map(|(index, record)| (record.number.clone(), index))
            .collect();

        // Neither sequences nor display names are guaranteed unique; the
        // first occurrence wins, matching catalog order
        let mut sequences = HashMap::with_capacity(records.len());
        let mut names = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if sequences.contains_key(&record.sequence) {
                debug!(
                    "Duplicate code sequence in catalog: {}",
                    record.sequence_string()
                );
            } else {
                sequences.insert(record.sequence.clone(), index);
            }
            let lookup_name = normalize_lookup_name(&record.short_name);
            if names.contains_key(&lookup_name) {
                debug!("Duplicate display name in catalog: {}", record.short_name);
            } else {
                names.insert(lookup_name, index);
            }
        }

        Ok(EmojiCatalog {
            records,
            numbers,
            sequences,
            names,
        })
    }

    /// Parses a catalog from a JSON string.
    /// # Examples
    /// ```
    /// use emoji_catalog::catalog::catalog::EmojiCatalog;
    ///
    /// let json = r#"[{
    ///     "number": "1",
    ///     "code": ["1f600"],
    ///     "shortName": "grinning face",
    ///     "keywords": ["face", "grin"],
    ///     "mainCategory": "Smileys & Emotion",
    ///     "subCategory": "face-smiling",
    ///     "small": {
    ///         "source": "emojis_18px.png",
    ///         "sourceDimensions": {"x": 648, "y": 648},
    ///         "frame": {"x": 180, "y": 450, "w": 18, "h": 18}
    ///     },
    ///     "normal": {
    ///         "source": "emojis_36px.png",
    ///         "sourceDimensions": {"x": 1296, "y": 1296},
    ///         "frame": {"x": 360, "y": 900, "w": 36, "h": 36}
    ///     },
    ///     "large": {
    ///         "source": "emojis_72px.png",
    ///         "sourceDimensions": {"x": 2592, "y": 2592},
    ///         "frame": {"x": 720, "y": 1800, "w": 72, "h": 72}
    ///     },
    ///     "massive": {
    ///         "source": "emojis_144px.png",
    ///         "sourceDimensions": {"x": 5184, "y": 5184},
    ///         "frame": {"x": 1440, "y": 3600, "w": 144, "h": 144}
    ///     },
    ///     "biggest": {
    ///         "source": "emojis_288px.png",
    ///         "sourceDimensions": {"x": 10368, "y": 10368},
    ///         "frame": {"x": 2880, "y": 7200, "w": 288, "h": 288}
    ///     }
    /// }]"#;
    ///
    /// let catalog = EmojiCatalog::from_json_str(json).unwrap();
    ///
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(catalog.get_by_sequence(&[0x1f600]).unwrap().number, "1");
    /// ```
    pub fn from_json_str(json: &str) -> Result<EmojiCatalog, CatalogError> {
        let prototypes: Vec<EmojiRecordPrototype> = serde_json::from_str(json)?;
        Self::from_prototypes(prototypes)
    }

    /// Parses a catalog from a reader yielding the JSON array.
    pub fn from_reader<R: Read>(reader: R) -> Result<EmojiCatalog, CatalogError> {
        let prototypes: Vec<EmojiRecordPrototype> = serde_json::from_reader(reader)?;
        Self::from_prototypes(prototypes)
    }

    /// Loads and validates a catalog from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<EmojiCatalog, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_prototypes(
        prototypes: Vec<EmojiRecordPrototype>,
    ) -> Result<EmojiCatalog, CatalogError> {
        let records = prototypes
            .into_iter()
            .map(EmojiRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    /// Serializes the catalog back to its JSON wire format.
    ///
    /// Parsing the output again yields a structurally identical catalog.
    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        let prototypes: Vec<EmojiRecordPrototype> = self
            .records
            .iter()
            .map(EmojiRecordPrototype::from)
            .collect();
        Ok(serde_json::to_string_pretty(&prototypes)?)
    }

    /// Iterates over all records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &EmojiRecord> {
        self.records.iter()
    }

    /// Returns the number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by its ordinal `number`.
    pub fn get_by_number(&self, number: &str) -> Option<&EmojiRecord> {
        self.numbers.get(number).map(|index| &self.records[*index])
    }

    /// Looks up a record by its codepoint sequence.
    /// # Examples
    /// ```
    /// use emoji_catalog::catalog::catalog::EmojiCatalog;
    ///
    /// let catalog = EmojiCatalog::bundled();
    ///
    /// let rainbow_flag = catalog
    ///     .get_by_sequence(&[0x1f3f3, 0xfe0f, 0x200d, 0x1f308])
    ///     .unwrap();
    ///
    /// assert_eq!(rainbow_flag.short_name, "rainbow flag");
    /// ```
    pub fn get_by_sequence<T: AsRef<[u32]>>(&self, sequence: T) -> Option<&EmojiRecord> {
        self.sequences
            .get(sequence.as_ref())
            .map(|index| &self.records[*index])
    }

    /// Finds a record by its display name (case-insensitive, delimiters are
    /// folded). The query may also be the emoji itself.
    /// # Examples
    /// ```
    /// use emoji_catalog::catalog::catalog::EmojiCatalog;
    ///
    /// let catalog = EmojiCatalog::bundled();
    ///
    /// assert_eq!(catalog.get_by_name("Grinning-Face").unwrap().number, "1");
    /// assert_eq!(catalog.get_by_name("🤔").unwrap().short_name, "thinking face");
    /// assert!(catalog.get_by_name("no such emoji").is_none());
    /// ```
    pub fn get_by_name(&self, name: &str) -> Option<&EmojiRecord> {
        // The query might be the emoji itself
        let chars: Vec<u32> = name.chars().map(|character| character as u32).collect_vec();
        if let Some(record) = self.get_by_sequence(&chars) {
            Some(record)
        } else {
            let lookup_name = normalize_lookup_name(name);
            match self.names.get(&lookup_name) {
                Some(index) => Some(&self.records[*index]),
                None => {
                    debug!("{} is not a recognized emoji name", name);
                    None
                }
            }
        }
    }

    /// Substring search over display names and keywords, in catalog order.
    ///
    /// The query is normalized the same way as lookup names, so case and
    /// delimiters don't matter. An empty query matches nothing.
    /// # Examples
    /// ```
    /// use emoji_catalog::catalog::catalog::EmojiCatalog;
    ///
    /// let catalog = EmojiCatalog::bundled();
    ///
    /// let hits = catalog.search("grin");
    /// assert!(hits.iter().any(|record| record.short_name == "grinning face"));
    ///
    /// // Keywords are searched too
    /// let thumbs = catalog.search("+1");
    /// assert!(thumbs.iter().all(|record| record.short_name.starts_with("thumbs up")));
    /// assert!(catalog.search("").is_empty());
    /// ```
    pub fn search(&self, query: &str) -> Vec<&EmojiRecord> {
        let query = normalize_lookup_name(query);
        if query.is_empty() {
            return vec![];
        }
        self.records
            .iter()
            .filter(|record| {
                normalize_lookup_name(&record.short_name).contains(&query)
                    || record
                        .keywords
                        .iter()
                        .any(|keyword| normalize_lookup_name(keyword).contains(&query))
            })
            .collect()
    }

    /// Groups the catalog by `mainCategory` and `subCategory`.
    ///
    /// Categories appear in the order of their first record, and each group
    /// lists its records in catalog order; this is exactly the layout a
    /// picker renders.
    pub fn group_by_category(&self) -> Vec<CategoryGroup> {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        for record in &self.records {
            let group_index = groups
                .iter()
                .position(|group| group.main_category == record.main_category)
                .unwrap_or_else(|| {
                    groups.push(CategoryGroup {
                        main_category: &record.main_category,
                        sub_groups: Vec::new(),
                    });
                    groups.len() - 1
                });
            let group = &mut groups[group_index];
            let sub_index = group
                .sub_groups
                .iter()
                .position(|sub_group| sub_group.sub_category == record.sub_category)
                .unwrap_or_else(|| {
                    group.sub_groups.push(SubCategoryGroup {
                        sub_category: &record.sub_category,
                        records: Vec::new(),
                    });
                    group.sub_groups.len() - 1
                });
            group.sub_groups[sub_index].records.push(record);
        }
        groups
    }

    /// Resolves a record (by `number`) and a render size to a [SpriteClip].
    /// # Examples
    /// ```
    /// use emoji_catalog::catalog::catalog::EmojiCatalog;
    /// use emoji_catalog::records::sprite::SpriteSize;
    ///
    /// let catalog = EmojiCatalog::bundled();
    ///
    /// let clip = catalog.clip("1", SpriteSize::Small).unwrap();
    ///
    /// assert_eq!(clip.source, "emojis_18px.png");
    /// assert_eq!((clip.x, clip.y, clip.w, clip.h), (180, 450, 18, 18));
    /// ```
    pub fn clip(&self, number: &str, size: SpriteSize) -> Option<SpriteClip> {
        self.get_by_number(number).map(|record| record.clip(size))
    }
}

/// Converts names to the format used in the lookup table for names.
///
/// Delimiters (`-`, `_`, `.` and spaces) are folded to single spaces and some
/// special characters like `:` or `,` are removed, so
/// `"woman: medium skin tone, white hair"` and `"Woman Medium-Skin-Tone
/// White_Hair"` normalize to the same string.
pub fn normalize_lookup_name(name: &str) -> String {
    lazy_static! {
        static ref DELIMITERS: Regex = Regex::new(r"[-_. ]+").unwrap();
        static ref REMOVED: Regex = Regex::new(r#"[,*\\/:'"()]"#).unwrap();
    }
    (&*DELIMITERS as &Regex)
        .split(&REMOVED.replace_all(name, ""))
        .filter(|part| !part.is_empty())
        .join(" ")
        .to_lowercase()
}

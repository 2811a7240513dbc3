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
//! The JSON wire form of catalog entries.
//!
//! The catalog is stored as a JSON array using the camelCase schema of the
//! original picker asset (`shortName`, `mainCategory`, `sourceDimensions`,
//! `code` as an array of hex strings). These prototypes mirror that schema
//! one-to-one; the typed [EmojiRecord] is produced via [TryFrom], which is
//! where the hex sequence parsing (and its failures) live.

use std::convert::TryFrom;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::errors::CatalogError;
use crate::records::record::EmojiRecord;
use crate::records::sprite::{SpriteFrame, SpriteSet};

/// One catalog entry as it appears in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiRecordPrototype {
    pub number: String,
    /// Hexadecimal codepoint strings, e.g. `["1f3f3", "fe0f", "200d", "1f308"]`
    pub code: Vec<String>,
    pub short_name: String,
    pub keywords: Vec<String>,
    pub main_category: String,
    pub sub_category: String,
    pub small: SpriteFrame,
    pub normal: SpriteFrame,
    pub large: SpriteFrame,
    pub massive: SpriteFrame,
    pub biggest: SpriteFrame,
}

impl TryFrom<EmojiRecordPrototype> for EmojiRecord {
    type Error = CatalogError;

    fn try_from(prototype: EmojiRecordPrototype) -> Result<Self, Self::Error> {
        let sequence = parse_sequence(&prototype.code).map_err(|code| {
            warn!(
                "Malformed code sequence in catalog entry {}: {:?}",
                prototype.number, code
            );
            CatalogError::MalformedSequence {
                number: prototype.number.clone(),
                code,
            }
        })?;
        Ok(EmojiRecord {
            number: prototype.number,
            sequence,
            short_name: prototype.short_name,
            keywords: prototype.keywords,
            main_category: prototype.main_category,
            sub_category: prototype.sub_category,
            sprites: SpriteSet {
                small: prototype.small,
                normal: prototype.normal,
                large: prototype.large,
                massive: prototype.massive,
                biggest: prototype.biggest,
            },
        })
    }
}

impl From<&EmojiRecord> for EmojiRecordPrototype {
    fn from(record: &EmojiRecord) -> Self {
        let sprites = &record.sprites;
        EmojiRecordPrototype {
            number: record.number.clone(),
            // Serialization normalizes codepoints to lowercase hex without
            // leading zeros, which is what the catalog data uses anyway
            code: record
                .sequence
                .iter()
                .map(|codepoint| format!("{:x}", codepoint))
                .collect(),
            short_name: record.short_name.clone(),
            keywords: record.keywords.clone(),
            main_category: record.main_category.clone(),
            sub_category: record.sub_category.clone(),
            small: sprites.small.clone(),
            normal: sprites.normal.clone(),
            large: sprites.large.clone(),
            massive: sprites.massive.clone(),
            biggest: sprites.biggest.clone(),
        }
    }
}

/// Parses an array of hexadecimal codepoint strings into a sequence.
///
/// Unlike the lenient filename parsing in emoji fonts, a catalog entry is
/// rejected as a whole if it is empty or any element is not a valid scalar;
/// the offending element is returned in the `Err` case.
fn parse_sequence(codes: &[String]) -> Result<Vec<u32>, String> {
    lazy_static! {
        static ref HEX_SCALAR: Regex = Regex::new(r"^[a-fA-F0-9]{1,8}$").unwrap();
    }
    if codes.is_empty() {
        return Err(String::new());
    }
    codes
        .iter()
        .map(|code| {
            if HEX_SCALAR.is_match(code) {
                u32::from_str_radix(code, 16).map_err(|_| code.clone())
            } else {
                Err(code.clone())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::*;

    fn prototype(number: &str, code: Vec<&str>) -> EmojiRecordPrototype {
        let sprite = SpriteFrame {
            source: String::from("emojis_18px.png"),
            source_dimensions: crate::records::sprite::SheetDimensions { x: 648, y: 648 },
            frame: crate::records::sprite::Frame { x: 0, y: 0, w: 18, h: 18 },
        };
        EmojiRecordPrototype {
            number: number.to_string(),
            code: code.into_iter().map(String::from).collect(),
            short_name: String::from("test"),
            keywords: vec![],
            main_category: String::from("Smileys & Emotion"),
            sub_category: String::from("face-smiling"),
            small: sprite.clone(),
            normal: sprite.clone(),
            large: sprite.clone(),
            massive: sprite.clone(),
            biggest: sprite,
        }
    }

    #[test]
    fn parses_multi_codepoint_sequences() {
        let record = EmojiRecord::try_from(prototype("801", vec!["1f3f3", "FE0F", "200d", "1f308"]))
            .unwrap();
        assert_eq!(record.sequence, vec![0x1f3f3, 0xfe0f, 0x200d, 0x1f308]);
        assert!(record.is_zwj_sequence());
    }

    #[test]
    fn rejects_empty_code_arrays() {
        let result = EmojiRecord::try_from(prototype("1", vec![]));
        match result {
            Err(CatalogError::MalformedSequence { number, code }) => {
                assert_eq!(number, "1");
                assert!(code.is_empty());
            }
            other => panic!("expected MalformedSequence, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_hex_codes() {
        let result = EmojiRecord::try_from(prototype("1", vec!["1f600", "not-hex"]));
        match result {
            Err(CatalogError::MalformedSequence { code, .. }) => assert_eq!(code, "not-hex"),
            other => panic!("expected MalformedSequence, got {:?}", other),
        }
    }

    #[test]
    fn serialization_normalizes_to_lowercase_hex() {
        let record = EmojiRecord::try_from(prototype("35", vec!["2764", "FE0F"])).unwrap();
        let back = EmojiRecordPrototype::from(&record);
        assert_eq!(back.code, vec!["2764", "fe0f"]);
    }
}

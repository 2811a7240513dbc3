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
//! The main data struct for a single catalog entry.

use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use itertools::Itertools;

use crate::records::sprite::{SpriteClip, SpriteSet, SpriteSize};

/// One emoji descriptor from the catalog.
///
/// Records are created once when the catalog is loaded and never mutated;
/// consumers iterate, look them up and resolve sprite clips from them.
#[derive(Debug, Eq, Clone)]
pub struct EmojiRecord {
    /// The ordinal identifier from the curated catalog ordering.
    ///
    /// It is a decimal string, unique within a catalog, and may have gaps
    /// where entries were removed upstream.
    pub number: String,
    /// The sequence of Unicode® character codepoints that represents this
    /// emoji (which might be a ZWJ or modifier sequence).
    pub sequence: Vec<u32>,
    /// The human-readable display label; not guaranteed unique.
    pub short_name: String,
    /// Search terms used for text search matching; order is irrelevant.
    pub keywords: Vec<String>,
    /// The top level of the two-level taxonomy (e.g. `Smileys & Emotion`).
    pub main_category: String,
    /// The second taxonomy level (e.g. `face-smiling`).
    pub sub_category: String,
    /// The five sprite-sheet frames this emoji can be rendered from.
    pub sprites: SpriteSet,
}

impl EmojiRecord {
    /// Resolves this record at the given render size to a [SpriteClip].
    pub fn clip(&self, size: SpriteSize) -> SpriteClip {
        self.sprites.get(size).into()
    }

    /// Returns the emoji itself as a string.
    /// # Examples
    /// ```
    /// use emoji_catalog::catalog::catalog::EmojiCatalog;
    ///
    /// let catalog = EmojiCatalog::bundled();
    /// let grinning = catalog.get_by_number("1").unwrap();
    ///
    /// assert_eq!(String::from("😀"), grinning.display_emoji());
    /// ```
    pub fn display_emoji(&self) -> String {
        self.sequence
            .iter()
            .filter_map(|codepoint| char::from_u32(*codepoint))
            .collect()
    }

    /// Formats the codepoint sequence as uppercase hex joined with dashes,
    /// e.g. `1F3F3-FE0F-200D-1F308`.
    pub fn sequence_string(&self) -> String {
        self.sequence
            .iter()
            .map(|codepoint| format!("{:X}", codepoint))
            .join("-")
    }

    /// Whether the sequence contains the zero-width joiner (`U+200D`).
    pub fn is_zwj_sequence(&self) -> bool {
        self.sequence.contains(&0x200d)
    }
}

impl Hash for EmojiRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sequence.hash(state)
    }
}

impl PartialEq<EmojiRecord> for EmojiRecord {
    /// Compares two records by their code sequence
    fn eq(&self, other: &EmojiRecord) -> bool {
        self.sequence == other.sequence
    }
}

impl PartialEq<[u32]> for EmojiRecord {
    fn eq(&self, other: &[u32]) -> bool {
        self.sequence == other
    }
}

impl PartialOrd for EmojiRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.sequence.partial_cmp(&other.sequence)
    }
}

impl Ord for EmojiRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sequence.cmp(&other.sequence)
    }
}

impl AsRef<[u32]> for EmojiRecord {
    fn as_ref(&self) -> &[u32] {
        self.sequence.as_ref()
    }
}

impl Display for EmojiRecord {
    /// Shows the display name if there is one, otherwise the code sequence in
    /// square brackets (e.g. `[1F3F3-FE0F-200D-1F308]`).
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if !self.short_name.is_empty() {
            write!(f, "{}", self.short_name)
        } else {
            write!(f, "[{}]", self.sequence_string())
        }
    }
}

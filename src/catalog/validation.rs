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
//! Shape validation for catalog records.
//!
//! A catalog is inert data, so the whole "error taxonomy" is data
//! well-formedness, checked once at load time:
//! - every frame is square,
//! - the five sizes scale the glyph side by `1:2:4:8:16`,
//! - frames stay inside their sheet,
//! - `number`s are unique decimal strings,
//! - sequences are non-empty.
//!
//! All violations are collected so a broken data file can be fixed in one go.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::records::record::EmojiRecord;
use crate::records::sprite::SpriteSize;

/// A single invariant violation, naming the record (by `number`) and, where
/// applicable, the size variant it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The same `number` appears on more than one record
    DuplicateNumber { number: String },
    /// The `number` is not a non-empty decimal string
    NonDecimalNumber { number: String },
    /// The codepoint sequence is empty
    EmptySequence { number: String },
    /// A frame with `w != h`
    NonSquareFrame { number: String, size: SpriteSize },
    /// A frame whose side is not the small side scaled by the size factor
    MisscaledFrame { number: String, size: SpriteSize },
    /// A frame that exceeds its sheet's dimensions
    FrameOutOfBounds { number: String, size: SpriteSize },
}

/// Validates a slice of records, returning every violation found.
///
/// Per-record checks run in parallel; the duplicate check runs over the whole
/// slice afterwards.
pub fn validate(records: &[EmojiRecord]) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = records
        .par_iter()
        .flat_map(|record| validate_record(record))
        .collect();
    errors.extend(duplicate_numbers(records));
    errors
}

/// Checks the per-record invariants (everything except `number` uniqueness).
pub fn validate_record(record: &EmojiRecord) -> Vec<ValidationError> {
    let number = &record.number;
    let mut errors = Vec::new();

    if number.is_empty() || !number.chars().all(|character| character.is_ascii_digit()) {
        errors.push(ValidationError::NonDecimalNumber {
            number: number.clone(),
        });
    }

    if record.sequence.is_empty() {
        errors.push(ValidationError::EmptySequence {
            number: number.clone(),
        });
    }

    let small_side = record.sprites.small.frame.w;
    for (size, sprite) in record.sprites.iter() {
        if !sprite.frame.is_square() {
            errors.push(ValidationError::NonSquareFrame {
                number: number.clone(),
                size,
            });
        }
        // A small side so large that scaling it overflows cannot have
        // correctly scaled variants either
        let misscaled = small_side
            .checked_mul(size.factor())
            .map_or(true, |expected| sprite.frame.w != expected);
        if misscaled {
            errors.push(ValidationError::MisscaledFrame {
                number: number.clone(),
                size,
            });
        }
        if !sprite.frame.fits_within(&sprite.source_dimensions) {
            errors.push(ValidationError::FrameOutOfBounds {
                number: number.clone(),
                size,
            });
        }
    }

    errors
}

fn duplicate_numbers(records: &[EmojiRecord]) -> Vec<ValidationError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    records
        .iter()
        .filter_map(|record| {
            if seen.insert(&record.number) {
                None
            } else {
                Some(ValidationError::DuplicateNumber {
                    number: record.number.clone(),
                })
            }
        })
        .collect()
}

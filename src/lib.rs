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
//! A typed, schema-validated catalog of emoji sprite metadata.
//!
//! The catalog is the data behind a sprite-sheet based emoji picker: an
//! ordered list of records, each with a Unicode codepoint sequence, a display
//! name, search keywords, a two-level category taxonomy and pixel frames into
//! sprite sheets at five render sizes. This crate loads that data from JSON,
//! validates its shape invariants and exposes the lookup, search and grouping
//! operations pickers need. The sprite sheet images themselves are an
//! external asset; nothing here renders.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// The [catalog::catalog::EmojiCatalog] container, its JSON wire format,
/// validation and errors
pub mod catalog;
/// Data structs for single emojis and their sprite geometry
pub mod records;

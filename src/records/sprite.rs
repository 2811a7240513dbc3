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
//! Geometry types that locate emoji glyphs inside sprite sheets.
//!
//! Every emoji in the catalog is cut from five sprite sheets, one per render
//! size. A [SpriteFrame] names the sheet, its total dimensions and the pixel
//! rectangle of the glyph; a [SpriteClip] is the flattened form that rendering
//! code consumes.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five render sizes an emoji sprite is available in.
///
/// The glyph side length doubles from one size to the next, so the scale
/// factors relative to [SpriteSize::Small] are `1:2:4:8:16`.
/// # Examples
/// ```
/// use emoji_catalog::records::sprite::SpriteSize;
///
/// assert_eq!(SpriteSize::Small.factor(), 1);
/// assert_eq!(SpriteSize::Normal.factor(), 2);
/// assert_eq!(SpriteSize::Biggest.factor(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpriteSize {
    Small = 0,
    Normal = 1,
    Large = 2,
    Massive = 3,
    Biggest = 4,
}

impl SpriteSize {
    /// All sizes, in ascending order.
    pub const ALL: [SpriteSize; 5] = [
        SpriteSize::Small,
        SpriteSize::Normal,
        SpriteSize::Large,
        SpriteSize::Massive,
        SpriteSize::Biggest,
    ];

    /// The scale factor of this size relative to [SpriteSize::Small].
    pub fn factor(self) -> u32 {
        1 << (self as u32)
    }

    /// The field name this size uses in the catalog's JSON schema.
    pub fn name(self) -> &'static str {
        match self {
            SpriteSize::Small => "small",
            SpriteSize::Normal => "normal",
            SpriteSize::Large => "large",
            SpriteSize::Massive => "massive",
            SpriteSize::Biggest => "biggest",
        }
    }
}

impl Display for SpriteSize {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SpriteSize {
    type Err = UnknownSpriteSize;

    /// Parses the lowercase schema name of a size.
    /// # Examples
    /// ```
    /// use std::str::FromStr;
    /// use emoji_catalog::records::sprite::SpriteSize;
    ///
    /// assert_eq!(SpriteSize::from_str("massive"), Ok(SpriteSize::Massive));
    /// assert!(SpriteSize::from_str("gigantic").is_err());
    /// ```
    fn from_str(size: &str) -> Result<Self, Self::Err> {
        match size.trim().to_lowercase().as_str() {
            "small" => Ok(SpriteSize::Small),
            "normal" => Ok(SpriteSize::Normal),
            "large" => Ok(SpriteSize::Large),
            "massive" => Ok(SpriteSize::Massive),
            "biggest" => Ok(SpriteSize::Biggest),
            _ => Err(UnknownSpriteSize(size.to_owned())),
        }
    }
}

/// A simple wrapper indicating that a string did not name one of the five
/// render sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSpriteSize(pub String);

/// A pixel rectangle locating one glyph within a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Frame {
    /// Glyphs are square; anything else is a data error.
    pub fn is_square(&self) -> bool {
        self.w == self.h
    }

    /// Checks that the rectangle lies entirely inside a sheet of the given
    /// dimensions.
    ///
    /// Coordinates that don't even fit into `u32` arithmetic are out of
    /// bounds, not a panic; catalog data is untrusted input.
    /// # Examples
    /// ```
    /// use emoji_catalog::records::sprite::{Frame, SheetDimensions};
    ///
    /// let dimensions = SheetDimensions { x: 648, y: 648 };
    /// let inside = Frame { x: 630, y: 630, w: 18, h: 18 };
    /// let outside = Frame { x: 631, y: 630, w: 18, h: 18 };
    ///
    /// assert!(inside.fits_within(&dimensions));
    /// assert!(!outside.fits_within(&dimensions));
    /// ```
    pub fn fits_within(&self, dimensions: &SheetDimensions) -> bool {
        self.x
            .checked_add(self.w)
            .map_or(false, |end| end <= dimensions.x)
            && self
                .y
                .checked_add(self.h)
                .map_or(false, |end| end <= dimensions.y)
    }
}

/// The total pixel size of a sprite sheet.
///
/// The catalog data calls the axes `x` (width) and `y` (height), which is kept
/// here to match the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetDimensions {
    pub x: u32,
    pub y: u32,
}

/// One size variant of an emoji sprite: the sheet it is cut from, the sheet's
/// total dimensions and the glyph's frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteFrame {
    /// Filename of the sprite sheet image asset.
    pub source: String,
    pub source_dimensions: SheetDimensions,
    pub frame: Frame,
}

/// The five size variants of one emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSet {
    pub small: SpriteFrame,
    pub normal: SpriteFrame,
    pub large: SpriteFrame,
    pub massive: SpriteFrame,
    pub biggest: SpriteFrame,
}

impl SpriteSet {
    /// Returns the variant for the given render size.
    pub fn get(&self, size: SpriteSize) -> &SpriteFrame {
        match size {
            SpriteSize::Small => &self.small,
            SpriteSize::Normal => &self.normal,
            SpriteSize::Large => &self.large,
            SpriteSize::Massive => &self.massive,
            SpriteSize::Biggest => &self.biggest,
        }
    }

    /// Iterates over all five variants in ascending size order.
    pub fn iter(&self) -> impl Iterator<Item = (SpriteSize, &SpriteFrame)> {
        SpriteSize::ALL.iter().map(move |size| (*size, self.get(*size)))
    }
}

/// A resolved sprite clip, ready to hand to rendering code: the sheet image,
/// its dimensions and the glyph rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteClip {
    pub source: String,
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl From<&SpriteFrame> for SpriteClip {
    fn from(sprite: &SpriteFrame) -> Self {
        SpriteClip {
            source: sprite.source.clone(),
            sheet_width: sprite.source_dimensions.x,
            sheet_height: sprite.source_dimensions.y,
            x: sprite.frame.x,
            y: sprite.frame.y,
            w: sprite.frame.w,
            h: sprite.frame.h,
        }
    }
}

//! Gem colors and per-color storage.
//!
//! ## Color
//!
//! The five gem colors, in the order cost vectors list them:
//! black, red, green, blue, white.
//!
//! ## ColorMap
//!
//! Fixed five-entry storage indexed by `Color`. A `ColorMap<u8>` is the
//! bonus vector: the permanent discount each purchased card grants.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::core::Error;

/// Number of gem colors.
pub const COLOR_COUNT: usize = 5;

/// Gem color. Discriminants follow cost-vector order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Blue = 3,
    White = 4,
}

impl Color {
    /// All colors in cost-vector order.
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::White,
    ];

    /// Position in a cost vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name as used in card text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::White => "white",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::UnknownColor(s.to_string()))
    }
}

/// Per-color storage with O(1) access.
///
/// ## Example
///
/// ```
/// use splendor_anneal::cards::{Color, ColorMap};
///
/// let mut bonus: ColorMap<u8> = ColorMap::default();
/// bonus[Color::Green] += 1;
///
/// assert_eq!(bonus[Color::Green], 1);
/// assert_eq!(bonus.total(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; COLOR_COUNT],
}

impl<T> ColorMap<T> {
    /// Wrap an array given in cost-vector order.
    pub const fn from_array(data: [T; COLOR_COUNT]) -> Self {
        Self { data }
    }

    /// Iterate over (Color, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }

    /// Underlying array in cost-vector order.
    #[must_use]
    pub fn as_array(&self) -> &[T; COLOR_COUNT] {
        &self.data
    }
}

impl ColorMap<u8> {
    /// Sum over all colors.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.data.iter().map(|&v| u32::from(v)).sum()
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}

/// Permanent per-color discount from purchased cards.
pub type BonusVector = ColorMap<u8>;

//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! Pentago is strictly two-player: Black and White. Black always moves
//! first, so the color to move is a pure function of how many marbles have
//! been placed.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`, used wherever the engine
//! tracks something per player (e.g. which colors completed a line).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::UnknownColor;

/// Marble color / player identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors in turn order.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// The color that places the next marble after `pieces_placed` marbles.
    ///
    /// ```
    /// use pentago::core::Color;
    ///
    /// assert_eq!(Color::to_move_after(0), Color::Black);
    /// assert_eq!(Color::to_move_after(1), Color::White);
    /// assert_eq!(Color::to_move_after(34), Color::Black);
    /// ```
    #[must_use]
    pub const fn to_move_after(pieces_placed: u8) -> Self {
        if pieces_placed % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Slot index (Black = 0, White = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    /// Lowercase name, as used in move notation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
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
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Color::Black),
            "white" | "w" => Ok(Color::White),
            _ => Err(UnknownColor(s.to_string())),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use pentago::core::{Color, ColorMap};
///
/// let mut wins: ColorMap<bool> = ColorMap::default();
/// wins[Color::White] = true;
///
/// assert!(!wins[Color::Black]);
/// assert!(wins[Color::White]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

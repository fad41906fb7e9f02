//! Board coordinates and cell contents.
//!
//! ## Layout
//!
//! Positions are `(row, col)` pairs, both 0-based, row 0 at the top:
//!
//! ```text
//!        col 0 1 2   3 4 5
//!   row 0    . . . | . . .
//!       1    . Q1. | . Q2.
//!       2    . . . | . . .
//!            ------+------
//!       3    . . . | . . .
//!       4    . Q3. | . Q4.
//!       5    . . . | . . .
//! ```
//!
//! A `Position` may hold coordinates outside the board: bounds are a rule
//! checked by the move validator, not a construction invariant.

use serde::{Deserialize, Serialize};

use super::player::Color;

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 6;

/// Number of cells on the board.
pub const CELL_COUNT: u8 = BOARD_SIZE * BOARD_SIZE;

/// A `(row, col)` board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position. No bounds check.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check if the position lies on the 6×6 board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Shift by a signed offset, returning `None` if the result leaves the board.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        let on_board = (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col);
        on_board.then(|| Self::new(row as u8, col as u8))
    }

    /// Iterate over all 36 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The marble color in this cell, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

//! Alphanumeric board labels.
//!
//! A label is a row letter `a`-`f` followed by a column digit `0`-`5`:
//! `"b3"` is row 1, column 3. Parsing is strict; anything else is a
//! [`NotationError`] and never reaches the engine.

use std::fmt;
use std::str::FromStr;

use crate::core::{Position, BOARD_SIZE};
use crate::error::NotationError;

const ROW_LETTERS: &str = "abcdef";

/// Parse a label such as `"e4"`.
///
/// ```
/// use pentago::core::Position;
/// use pentago::display::parse_label;
///
/// assert_eq!(parse_label("e4"), Ok(Position::new(4, 4)));
/// assert!(parse_label("g1").is_err());
/// ```
pub fn parse_label(label: &str) -> Result<Position, NotationError> {
    let mut chars = label.chars();
    let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(NotationError::Length(label.to_string()));
    };

    let row = ROW_LETTERS
        .find(letter)
        .ok_or(NotationError::Row(letter))?;
    let col = digit
        .to_digit(10)
        .filter(|&d| d < BOARD_SIZE as u32)
        .ok_or(NotationError::Column(digit))?;

    Ok(Position::new(row as u8, col as u8))
}

/// Format an on-board position as a label, or `None` if it is off the board.
#[must_use]
pub fn format_label(position: Position) -> Option<String> {
    if !position.is_on_board() {
        return None;
    }
    let letter = ROW_LETTERS.as_bytes()[position.row as usize] as char;
    Some(format!("{letter}{}", position.col))
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}

/// Labels for on-board positions, `(row,col)` otherwise.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match format_label(*self) {
            Some(label) => f.write_str(&label),
            None => write!(f, "({},{})", self.row, self.col),
        }
    }
}

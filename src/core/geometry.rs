//! Quadrant geometry: identities, rotation directions and fixed reference cells.
//!
//! Each quadrant is a 3×3 sub-grid with a fixed center and a fixed
//! inner corner (the sub-grid cell nearest the middle of the board):
//!
//! | Quadrant | Center | Inner corner |
//! |----------|--------|--------------|
//! | Q1       | (1,1)  | (2,2)        |
//! | Q2       | (1,4)  | (2,3)        |
//! | Q3       | (4,1)  | (3,2)        |
//! | Q4       | (4,4)  | (3,3)        |
//!
//! The eight non-center cells form the ring that a rotation permutes.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// One of the four 3×3 sub-boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    /// Top-left.
    Q1,
    /// Top-right.
    Q2,
    /// Bottom-left.
    Q3,
    /// Bottom-right.
    Q4,
}

const CENTERS: [Position; 4] = [
    Position::new(1, 1),
    Position::new(1, 4),
    Position::new(4, 1),
    Position::new(4, 4),
];

const INNER_CORNERS: [Position; 4] = [
    Position::new(2, 2),
    Position::new(2, 3),
    Position::new(3, 2),
    Position::new(3, 3),
];

/// Ring offsets from the center, clockwise starting at up-left.
pub const RING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), // up-left
    (-1, 0),  // up
    (-1, 1),  // up-right
    (0, 1),   // right
    (1, 1),   // down-right
    (1, 0),   // down
    (1, -1),  // down-left
    (0, -1),  // left
];

impl Quadrant {
    /// All quadrants in numbering order.
    pub const ALL: [Quadrant; 4] = [Quadrant::Q1, Quadrant::Q2, Quadrant::Q3, Quadrant::Q4];

    /// Zero-based table index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Quadrant::Q1 => 0,
            Quadrant::Q2 => 1,
            Quadrant::Q3 => 2,
            Quadrant::Q4 => 3,
        }
    }

    /// One-based quadrant number (1..=4).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// The middle cell of the sub-grid; never moved by rotation.
    #[must_use]
    pub const fn center(self) -> Position {
        CENTERS[self.index()]
    }

    /// The sub-grid cell nearest the board's geometric center.
    #[must_use]
    pub const fn inner_corner(self) -> Position {
        INNER_CORNERS[self.index()]
    }

    /// The eight ring cells in clockwise order from up-left.
    #[must_use]
    pub fn ring(self) -> [Position; 8] {
        let center = self.center();
        RING_OFFSETS.map(|(d_row, d_col)| {
            Position::new(
                (center.row as i8 + d_row) as u8,
                (center.col as i8 + d_col) as u8,
            )
        })
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = u8;

    /// Convert a quadrant number (1..=4).
    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Quadrant::Q1),
            2 => Ok(Quadrant::Q2),
            3 => Ok(Quadrant::Q3),
            4 => Ok(Quadrant::Q4),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

/// Quarter-turn direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    /// Single-letter code: `'C'` clockwise, `'A'` anti-clockwise.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Direction::Clockwise => 'C',
            Direction::CounterClockwise => 'A',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = char;

    /// Convert a direction code (`'C'` or `'A'`).
    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'C' => Ok(Direction::Clockwise),
            'A' => Ok(Direction::CounterClockwise),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Clockwise => f.write_str("clockwise"),
            Direction::CounterClockwise => f.write_str("counter-clockwise"),
        }
    }
}

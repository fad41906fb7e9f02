//! Move representation: a placement plus a quadrant rotation.
//!
//! A `Move` does not carry a color: the mover is always the color implied by
//! how many marbles are on the board. `MoveRecord` is what the engine keeps
//! in its history once a move has been accepted.

use serde::{Deserialize, Serialize};

use super::geometry::{Direction, Quadrant};
use super::player::Color;
use super::position::Position;

/// A complete Pentago move.
///
/// ## Example
///
/// ```
/// use pentago::core::{Direction, Move, Position, Quadrant};
///
/// let mv = Move::new(Position::new(1, 3), Quadrant::Q4, Direction::Clockwise);
/// assert_eq!(mv.position.col, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell receiving the marble.
    pub position: Position,

    /// Quadrant to turn afterwards.
    pub quadrant: Quadrant,

    /// Which way to turn it.
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub const fn new(position: Position, quadrant: Quadrant, direction: Direction) -> Self {
        Self {
            position,
            quadrant,
            direction,
        }
    }
}

/// An accepted move with the metadata needed to replay it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Zero-based placement index (0 = Black's first marble).
    pub ply: u8,

    /// Color that moved.
    pub color: Color,

    /// Where the marble went.
    pub position: Position,

    /// The rotation actually performed. `None` when the placement won
    /// outright and the rotation was skipped.
    pub rotation: Option<(Quadrant, Direction)>,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(ply: u8, color: Color, position: Position, rotation: Option<(Quadrant, Direction)>) -> Self {
        Self {
            ply,
            color,
            position,
            rotation,
        }
    }

    /// Check whether the rotation was skipped by an instant win.
    #[must_use]
    pub fn rotation_skipped(&self) -> bool {
        self.rotation.is_none()
    }
}

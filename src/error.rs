//! Error types.
//!
//! Invalid moves are ordinary outcomes, not faults: `make_move` reports them
//! as a `RejectionReason` and leaves the game untouched.

use serde::{Deserialize, Serialize};

use crate::core::{Color, GamePhase};

/// Why a proposed move was refused.
///
/// Variants are listed in the order the validator checks them; the first
/// failing check decides the reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum RejectionReason {
    #[error("game is finished")]
    GameAlreadyFinished,

    #[error("not this player's turn")]
    WrongTurn,

    #[error("position out of bounds")]
    OutOfBounds,

    #[error("position is not empty")]
    CellOccupied,

    #[error("sub_board out of bounds")]
    InvalidQuadrant,

    #[error("rotation direction invalid")]
    InvalidDirection,
}

/// A board label such as `"b3"` could not be read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("label {0:?} must be one row letter followed by one column digit")]
    Length(String),

    #[error("row letter {0:?} is not in a-f")]
    Row(char),

    #[error("column digit {0:?} is not in 0-5")]
    Column(char),
}

/// A string did not name a marble color.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown color: {0:?}")]
pub struct UnknownColor(pub String);

/// A saved game state could not be restored.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("{placed} pieces recorded but {occupied} cells are occupied")]
    PieceCountMismatch { placed: u8, occupied: usize },

    #[error("{0} pieces placed exceeds the 36 cells of the board")]
    TooManyPieces(u8),

    #[error("{black} black and {white} white marbles cannot follow from alternating turns")]
    ColorImbalance { black: usize, white: usize },

    #[error("game is marked in progress but {0} already has five in a row")]
    UnresolvedWin(Color),

    #[error("game is marked in progress on a full board")]
    UnresolvedDraw,

    #[error("board does not support a {0} result")]
    PhaseMismatch(GamePhase),

    #[error("failed to decode state: {0}")]
    Codec(#[from] bincode::Error),
}

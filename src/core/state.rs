//! Game state: board, placement count and phase.
//!
//! ## GameState
//!
//! The complete, serializable state of one game:
//! - `board`: the 6×6 grid
//! - `pieces_placed`: marbles placed so far (always equal to the number of
//!   occupied cells)
//! - `phase`: in progress or one of the three terminal outcomes
//!
//! Whose turn it is is never stored. It is derived from the parity of
//! `pieces_placed`, so it cannot drift out of sync with the board.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::Color;
use super::position::CELL_COUNT;
use crate::error::StateError;
use crate::rules::GameResult;

/// Where the game stands.
///
/// `InProgress` is the only non-terminal phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    InProgress,
    BlackWon,
    WhiteWon,
    Draw,
}

impl GamePhase {
    /// The phase for a single winner.
    #[must_use]
    pub const fn won_by(color: Color) -> Self {
        match color {
            Color::Black => GamePhase::BlackWon,
            Color::White => GamePhase::WhiteWon,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }

    /// The final result, or `None` while the game continues.
    #[must_use]
    pub const fn result(self) -> Option<GameResult> {
        match self {
            GamePhase::InProgress => None,
            GamePhase::BlackWon => Some(GameResult::Winner(Color::Black)),
            GamePhase::WhiteWon => Some(GameResult::Winner(Color::White)),
            GamePhase::Draw => Some(GameResult::Draw),
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::InProgress => "UNFINISHED",
            GamePhase::BlackWon => "BLACK_WON",
            GamePhase::WhiteWon => "WHITE_WON",
            GamePhase::Draw => "DRAW",
        };
        f.write_str(name)
    }
}

/// Complete state of a Pentago game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub pieces_placed: u8,
    pub phase: GamePhase,
}

impl GameState {
    /// Create the starting state: empty board, Black to move.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The color whose turn it is by placement parity.
    ///
    /// Meaningful only while the game is in progress; a finished game still
    /// reports the color that would have moved next.
    #[must_use]
    pub const fn color_to_move(&self) -> Color {
        Color::to_move_after(self.pieces_placed)
    }

    /// Check if all 36 cells are occupied.
    #[must_use]
    pub const fn is_board_full(&self) -> bool {
        self.pieces_placed == CELL_COUNT
    }

    /// Check the placement-count invariants: the count matches the board
    /// and Black has exactly as many marbles as alternating turns allow.
    ///
    /// Line-based consistency (e.g. an unresolved five-in-a-row) is checked
    /// by the engine, which owns the line scanner.
    pub fn check_counts(&self) -> Result<(), StateError> {
        if self.pieces_placed > CELL_COUNT {
            return Err(StateError::TooManyPieces(self.pieces_placed));
        }
        let occupied = self.board.occupied();
        if occupied != self.pieces_placed as usize {
            return Err(StateError::PieceCountMismatch {
                placed: self.pieces_placed,
                occupied,
            });
        }
        let black = self.board.count(Color::Black);
        let white = self.board.count(Color::White);
        if black != (occupied + 1) / 2 || white != occupied / 2 {
            return Err(StateError::ColorImbalance { black, white });
        }
        Ok(())
    }

    /// Encode to compact bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StateError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes produced by [`GameState::to_bytes`].
    ///
    /// Only the encoding is checked here; use `Pentago::from_state` to
    /// validate the game itself.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

//! # pentago
//!
//! A rules engine for Pentago, the two-player abstract strategy game played
//! on a 6×6 board split into four rotatable 3×3 quadrants.
//!
//! ## Rules in Brief
//!
//! Black moves first. A turn places one marble on an empty cell and then
//! turns one quadrant a quarter turn. Five in a row (row, column or
//! diagonal) wins. A placement that completes a line wins on the spot and
//! the rotation is skipped; a rotation that completes lines for both colors,
//! or a full board with no line, is a draw.
//!
//! ## Design Principles
//!
//! 1. **All or nothing**: a move is validated completely before anything is
//!    written. Rejected moves leave the game untouched.
//!
//! 2. **Typed input**: positions, quadrants and directions are value types.
//!    Raw input (labels, quadrant numbers, `'C'`/`'A'`) is converted at the
//!    edge and rejected with a reason.
//!
//! 3. **Cheap snapshots**: the whole game state is `Copy`; history uses
//!    `im-rs` so cloning a game for search stays O(1).
//!
//! ## Modules
//!
//! - `core`: Colors, positions, quadrants, board, moves, game state, RNG
//! - `rules`: `RulesEngine` trait and random playouts
//! - `games`: The Pentago engine and its line scanner
//! - `display`: Board rendering, alphanumeric labels, render configuration
//! - `error`: Rejection reasons and parse/state errors
//! - `python`: PyO3 bindings (behind the `python` feature)

pub mod core;
pub mod display;
pub mod error;
pub mod games;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Color, ColorMap, Direction, GamePhase, GameRng, GameRngState, GameState, Move,
    MoveRecord, Position, Quadrant, BOARD_SIZE, CELL_COUNT,
};

pub use crate::display::{format_label, parse_label, render_board, RenderConfig};

pub use crate::error::{NotationError, RejectionReason, StateError, UnknownColor};

pub use crate::games::pentago::Pentago;

pub use crate::rules::{random_playout, GameResult, PlayoutOutcome, RulesEngine};

//! Core engine types: colors, positions, quadrant geometry, board, moves, state, RNG.
//!
//! Everything here is plain data plus the two board mutations. Rules
//! (validation and win resolution) live in `games::pentago`.

pub mod player;
pub mod position;
pub mod geometry;
pub mod board;
pub mod action;
pub mod state;
pub mod rng;

pub use player::{Color, ColorMap};
pub use position::{Cell, Position, BOARD_SIZE, CELL_COUNT};
pub use geometry::{Direction, Quadrant};
pub use board::Board;
pub use action::{Move, MoveRecord};
pub use state::{GamePhase, GameState};
pub use rng::{GameRng, GameRngState};

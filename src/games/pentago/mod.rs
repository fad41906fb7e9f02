//! Pentago: two players, a 6×6 board of four rotating 3×3 quadrants.
//!
//! - Each turn places a marble on an empty cell, then turns any quadrant
//!   a quarter turn
//! - Five in a row (horizontal, vertical or diagonal) wins
//! - A win straight from the placement ends the game before the rotation
//! - After a rotation, a line for both colors or a full board is a draw

mod game;
pub mod lines;

pub use game::Pentago;

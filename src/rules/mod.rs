//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions modify state
//! - Win/draw conditions
//!
//! `playout` drives any `RulesEngine` with random legal actions.

pub mod engine;
pub mod playout;

pub use engine::{GameResult, RulesEngine};
pub use playout::{random_playout, PlayoutOutcome};

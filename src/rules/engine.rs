//! Rules engine trait for game implementations.
//!
//! A rules engine owns its game state and defines:
//! - Whose turn it is
//! - What actions are legal
//! - How actions modify state
//! - Win/draw conditions

use crate::core::Color;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Single winner.
    Winner(Color),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// The winning color, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::Winner(c) => Some(*c),
            GameResult::Draw => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `to_move`: Return None once the game is over
/// - `legal_actions`: Return empty vec when nobody can act
/// - `apply_action`: Must be deterministic, and must leave state untouched
///   when it returns an error
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// A complete move for the player to act.
    type Action: Clone;

    /// Why an action was refused.
    type Error;

    /// The player whose turn it is, or `None` if the game is over.
    fn to_move(&self) -> Option<Color>;

    /// Enumerate all legal actions for the player to move.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Apply an action for the player to move.
    fn apply_action(&mut self, action: &Self::Action) -> Result<(), Self::Error>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check whether an action is currently legal.
    fn is_legal(&self, action: &Self::Action) -> bool
    where
        Self::Action: PartialEq,
    {
        self.legal_actions().contains(action)
    }
}

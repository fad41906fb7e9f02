//! Rendering configuration.
//!
//! Symbols default to the usual Pentago glyphs; embedders can override them
//! in code or load a `RenderConfig` from JSON (missing fields fall back to
//! the defaults).

use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// How the board is drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Symbol for a black marble.
    pub black: String,

    /// Symbol for a white marble.
    pub white: String,

    /// Symbol for an empty cell.
    pub empty: String,

    /// Print the symbol legend under the board.
    pub legend: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            black: "○".to_string(),
            white: "●".to_string(),
            empty: "-".to_string(),
            legend: true,
        }
    }
}

impl RenderConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the black marble symbol.
    #[must_use]
    pub fn with_black(mut self, symbol: impl Into<String>) -> Self {
        self.black = symbol.into();
        self
    }

    /// Set the white marble symbol.
    #[must_use]
    pub fn with_white(mut self, symbol: impl Into<String>) -> Self {
        self.white = symbol.into();
        self
    }

    /// Set the empty cell symbol.
    #[must_use]
    pub fn with_empty(mut self, symbol: impl Into<String>) -> Self {
        self.empty = symbol.into();
        self
    }

    /// Omit the legend line.
    #[must_use]
    pub fn without_legend(mut self) -> Self {
        self.legend = false;
        self
    }

    /// Symbol for a cell.
    #[must_use]
    pub fn symbol(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.empty,
            Cell::Black => &self.black,
            Cell::White => &self.white,
        }
    }
}

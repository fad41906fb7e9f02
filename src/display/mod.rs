//! Text-facing collaborators of the engine: board rendering, alphanumeric
//! labels and rendering configuration.
//!
//! Nothing here mutates a game. Parsing failures are reported as
//! `NotationError` before any move reaches the engine.

pub mod board;
pub mod config;
pub mod notation;

pub use board::render_board;
pub use config::RenderConfig;
pub use notation::{format_label, parse_label};

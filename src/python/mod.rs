//! Python bindings for the Pentago engine.
//!
//! # Quick Start
//!
//! ```python
//! import pentago
//!
//! game = pentago.Pentago()
//! game.make_move("black", "a2", 1, "C")
//! print(game.render())
//!
//! # Rejected moves raise ValueError and change nothing
//! try:
//!     game.make_move("black", "b2", 1, "C")
//! except ValueError as e:
//!     print(e)  # not this player's turn
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// pentago: a Pentago rules engine.
///
/// This module provides:
/// - The `Pentago` game with move validation and outcome resolution
/// - `Move` values for enumerating legal moves
/// - Random playouts for quick experiments
#[pymodule]
fn pentago(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyMove>()?;

    // Games
    m.add_class::<PyPentago>()?;

    Ok(())
}

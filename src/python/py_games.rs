//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Cell, GameRng, Position, BOARD_SIZE};
use crate::games::pentago::Pentago;
use crate::rules::{random_playout, RulesEngine};

use super::py_core::{to_color, to_position, PyMove};

/// Python wrapper for Pentago.
#[pyclass(name = "Pentago")]
#[derive(Clone, Default)]
pub struct PyPentago {
    game: Pentago,
}

#[pymethods]
impl PyPentago {
    /// Start a new game with an empty board and Black to move.
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Make a move.
    ///
    /// # Arguments
    /// - color: "black" or "white"
    /// - label: target cell, e.g. "b3"
    /// - quadrant: quadrant number, 1-4
    /// - direction: "C" (clockwise) or "A" (counter-clockwise)
    ///
    /// Raises ValueError with the rejection reason; the game is unchanged.
    fn make_move(&mut self, color: &str, label: &str, quadrant: i64, direction: &str) -> PyResult<()> {
        let color = to_color(color)?;
        let position = to_position(label)?;
        // Out-of-range raw values still reach the engine so they are
        // rejected in rule order.
        let quadrant = u8::try_from(quadrant).unwrap_or(0);
        let mut chars = direction.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => '\0',
        };

        self.game
            .make_move(color, position, quadrant, code)
            .map_err(|reason| PyValueError::new_err(reason.to_string()))
    }

    /// Game phase: "UNFINISHED", "BLACK_WON", "WHITE_WON" or "DRAW".
    fn game_phase(&self) -> String {
        self.game.game_phase().to_string()
    }

    /// Whether all 36 cells are occupied.
    fn is_board_full(&self) -> bool {
        self.game.is_board_full()
    }

    /// Color at a label ("black"/"white"), or None if empty.
    fn cell_at(&self, label: &str) -> PyResult<Option<&'static str>> {
        let position = to_position(label)?;
        Ok(self.game.cell_at(position).color().map(|c| c.name()))
    }

    /// Color to move, or None once the game is over.
    #[getter]
    fn to_move(&self) -> Option<&'static str> {
        self.game.to_move().map(|c| c.name())
    }

    /// Winning color, or None while in progress or drawn.
    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.game
            .is_terminal()
            .and_then(|result| result.winner())
            .map(|c| c.name())
    }

    /// Marbles placed so far.
    #[getter]
    fn pieces_placed(&self) -> u8 {
        self.game.pieces_placed()
    }

    /// Every legal move for the player to act.
    fn legal_moves(&self) -> Vec<PyMove> {
        self.game.legal_moves().into_iter().map(PyMove).collect()
    }

    /// Render the board as text.
    fn render(&self) -> String {
        self.game.render()
    }

    /// Board as a 6×6 int8 array: 1 black, -1 white, 0 empty.
    fn board_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let cells: Vec<i8> = Position::all()
            .map(|position| match self.game.cell_at(position) {
                Cell::Empty => 0,
                Cell::Black => 1,
                Cell::White => -1,
            })
            .collect();

        let size = BOARD_SIZE as usize;
        PyArray1::from_vec_bound(py, cells)
            .reshape([size, size])
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    /// Finish the game with uniformly random legal moves.
    ///
    /// Returns the final game phase.
    #[pyo3(signature = (seed = 42))]
    fn random_playout(&mut self, seed: u64) -> PyResult<String> {
        let mut rng = GameRng::new(seed);
        random_playout(&mut self.game, &mut rng, usize::MAX)
            .map_err(|reason| PyValueError::new_err(reason.to_string()))?;
        Ok(self.game.game_phase().to_string())
    }

    /// Copy the game.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __str__(&self) -> String {
        self.game.render()
    }

    fn __repr__(&self) -> String {
        format!(
            "Pentago(phase={}, pieces={})",
            self.game.game_phase(),
            self.game.pieces_placed()
        )
    }
}

//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Color, Direction, Move, Position, Quadrant};
use crate::display::{format_label, parse_label};
use crate::error::RejectionReason;

/// Python wrapper for Move.
#[pyclass(name = "Move")]
#[derive(Clone, Debug)]
pub struct PyMove(pub Move);

#[pymethods]
impl PyMove {
    /// Create a move from a label, quadrant number (1-4) and direction ('C' or 'A').
    #[new]
    fn new(label: &str, quadrant: u8, direction: char) -> PyResult<Self> {
        let position = to_position(label)?;
        let quadrant = Quadrant::try_from(quadrant)
            .map_err(|_| PyValueError::new_err(RejectionReason::InvalidQuadrant.to_string()))?;
        let direction = Direction::try_from(direction)
            .map_err(|_| PyValueError::new_err(RejectionReason::InvalidDirection.to_string()))?;
        Ok(Self(Move::new(position, quadrant, direction)))
    }

    /// Target cell label, e.g. "b3".
    #[getter]
    fn label(&self) -> String {
        format_label(self.0.position).unwrap_or_else(|| self.0.position.to_string())
    }

    /// Quadrant number (1-4).
    #[getter]
    fn quadrant(&self) -> u8 {
        self.0.quadrant.number()
    }

    /// Direction code, 'C' or 'A'.
    #[getter]
    fn direction(&self) -> char {
        self.0.direction.code()
    }

    fn __repr__(&self) -> String {
        format!(
            "Move({}, {}, {:?})",
            self.label(),
            self.quadrant(),
            self.direction()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

/// Parse a color name ("black"/"white") into a `Color`.
pub(crate) fn to_color(name: &str) -> PyResult<Color> {
    name.parse().map_err(|e: crate::error::UnknownColor| PyValueError::new_err(e.to_string()))
}

/// Parse a board label into a `Position`.
pub(crate) fn to_position(label: &str) -> PyResult<Position> {
    parse_label(label).map_err(|e| PyValueError::new_err(e.to_string()))
}

//! The 6×6 marble grid and its two mutations: placement and quadrant rotation.

use serde::{Deserialize, Serialize};

use super::geometry::{Direction, Quadrant};
use super::player::Color;
use super::position::{Cell, Position, BOARD_SIZE};

const N: usize = BOARD_SIZE as usize;

/// Ring slots a value advances per quarter turn.
const QUARTER_TURN: usize = 2;

/// A 6×6 grid of cells, indexed `[row][col]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at a position.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board.
    #[must_use]
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.row as usize][position.col as usize]
    }

    /// Get the cell at a position, or `None` if it is off the board.
    #[must_use]
    pub fn try_get(&self, position: Position) -> Option<Cell> {
        position.is_on_board().then(|| self.get(position))
    }

    /// Count non-empty cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    /// Count cells holding `color`.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        let cell = Cell::from(color);
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Put a marble on a cell. The caller has already validated the move.
    pub(crate) fn place(&mut self, position: Position, color: Color) {
        debug_assert!(self.get(position).is_empty(), "placing on occupied {position:?}");
        self.set(position, Cell::from(color));
    }

    pub(crate) fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.row as usize][position.col as usize] = cell;
    }

    /// Turn a quadrant 90° about its center.
    ///
    /// All eight ring values are read before any is written, so the
    /// permutation never reads a cell it already overwrote.
    pub(crate) fn rotate(&mut self, quadrant: Quadrant, direction: Direction) {
        let mut ring = quadrant.ring();
        if direction == Direction::CounterClockwise {
            ring.reverse();
        }

        let snapshot = ring.map(|position| self.get(position));
        for (i, &position) in ring.iter().enumerate() {
            let from = (i + ring.len() - QUARTER_TURN) % ring.len();
            self.set(position, snapshot[from]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board_with(cells: &[(u8, u8, Cell)]) -> Board {
        let mut board = Board::new();
        for &(row, col, cell) in cells {
            board.set(Position::new(row, col), cell);
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied(), 0);
        assert!(Position::all().all(|p| board.get(p).is_empty()));
    }

    #[test]
    fn test_place() {
        let mut board = Board::new();
        board.place(Position::new(2, 3), Color::White);

        assert_eq!(board.get(Position::new(2, 3)), Cell::White);
        assert_eq!(board.occupied(), 1);
        assert_eq!(board.count(Color::White), 1);
        assert_eq!(board.count(Color::Black), 0);
    }

    #[test]
    fn test_try_get_off_board() {
        let board = Board::new();
        assert_eq!(board.try_get(Position::new(6, 0)), None);
        assert_eq!(board.try_get(Position::new(5, 5)), Some(Cell::Empty));
    }

    #[test]
    fn test_rotate_clockwise_moves_corner_to_corner() {
        // Up-left of Q1 goes to up-right on a clockwise turn.
        let mut board = board_with(&[(0, 0, Cell::Black), (0, 1, Cell::White)]);
        board.rotate(Quadrant::Q1, Direction::Clockwise);

        assert_eq!(board.get(Position::new(0, 2)), Cell::Black);
        assert_eq!(board.get(Position::new(1, 2)), Cell::White); // up -> right
        assert_eq!(board.get(Position::new(0, 0)), Cell::Empty);
        assert_eq!(board.get(Position::new(0, 1)), Cell::Empty);
        assert_eq!(board.occupied(), 2);
    }

    #[test]
    fn test_rotate_counter_clockwise() {
        // Up-left goes to down-left on a counter-clockwise turn.
        let mut board = board_with(&[(3, 3, Cell::Black), (3, 4, Cell::White)]);
        board.rotate(Quadrant::Q4, Direction::CounterClockwise);

        assert_eq!(board.get(Position::new(5, 3)), Cell::Black);
        assert_eq!(board.get(Position::new(4, 3)), Cell::White); // up -> left
    }

    #[test]
    fn test_rotate_leaves_center_and_other_quadrants() {
        let mut board = board_with(&[
            (1, 4, Cell::White),
            (0, 0, Cell::Black),
            (5, 5, Cell::White),
            (0, 3, Cell::Black),
        ]);
        board.rotate(Quadrant::Q2, Direction::Clockwise);

        assert_eq!(board.get(Position::new(1, 4)), Cell::White);
        assert_eq!(board.get(Position::new(0, 0)), Cell::Black);
        assert_eq!(board.get(Position::new(5, 5)), Cell::White);
        assert_eq!(board.get(Position::new(0, 5)), Cell::Black);
    }

    #[test]
    fn test_rotate_full_ring_is_a_permutation() {
        // Every ring cell distinct-ish: alternate colors with one gap.
        let ring = Quadrant::Q3.ring();
        let mut board = Board::new();
        for (i, &p) in ring.iter().enumerate() {
            let cell = match i % 3 {
                0 => Cell::Black,
                1 => Cell::White,
                _ => Cell::Empty,
            };
            board.set(p, cell);
        }
        let before = board;

        board.rotate(Quadrant::Q3, Direction::Clockwise);
        for (i, &p) in ring.iter().enumerate() {
            assert_eq!(board.get(p), before.get(ring[(i + 6) % 8]));
        }
        assert_eq!(board.occupied(), before.occupied());
    }

    #[test]
    fn test_rotate_four_times_restores() {
        let mut board = board_with(&[(3, 0, Cell::Black), (4, 2, Cell::White), (5, 1, Cell::Black)]);
        let before = board;
        for _ in 0..4 {
            board.rotate(Quadrant::Q3, Direction::Clockwise);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_rotate_then_reverse_restores() {
        let mut board = board_with(&[(0, 3, Cell::White), (2, 4, Cell::Black)]);
        let before = board;
        board.rotate(Quadrant::Q2, Direction::CounterClockwise);
        assert_ne!(board, before);
        board.rotate(Quadrant::Q2, Direction::Clockwise);
        assert_eq!(board, before);
    }

    // === Rotation Properties ===

    fn arbitrary_board() -> impl Strategy<Value = Board> {
        prop::collection::vec(0u8..3, 36).prop_map(|codes| {
            let mut board = Board::new();
            for (position, code) in Position::all().zip(codes) {
                let cell = match code {
                    0 => Cell::Empty,
                    1 => Cell::Black,
                    _ => Cell::White,
                };
                board.set(position, cell);
            }
            board
        })
    }

    proptest! {
        #[test]
        fn prop_rotation_is_a_bijection(
            board in arbitrary_board(),
            quadrant in prop::sample::select(Quadrant::ALL.to_vec()),
        ) {
            let mut turned = board;
            turned.rotate(quadrant, Direction::Clockwise);
            prop_assert_eq!(turned.occupied(), board.occupied());
            prop_assert_eq!(turned.count(Color::Black), board.count(Color::Black));
            turned.rotate(quadrant, Direction::CounterClockwise);
            prop_assert_eq!(turned, board);

            for _ in 0..4 {
                turned.rotate(quadrant, Direction::CounterClockwise);
            }
            prop_assert_eq!(turned, board);

            turned.rotate(quadrant, Direction::CounterClockwise);
            prop_assert_eq!(turned.get(quadrant.center()), board.get(quadrant.center()));
            for position in Position::all().filter(|p| !quadrant.ring().contains(p)) {
                prop_assert_eq!(turned.get(position), board.get(position));
            }
        }
    }
}

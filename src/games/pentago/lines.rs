//! Line scanner: board lines through a cell or quadrant, and the five-in-a-row test.
//!
//! Lines are generated on demand as short position lists and never cached.
//! A diagonal is always the whole diagonal clipped to the board, so its
//! length ranges from 1 to 6; anything shorter than five cannot win and is
//! rejected by [`five_in_a_row`] up front.

use smallvec::SmallVec;

use crate::core::{Board, Color, Position, Quadrant, BOARD_SIZE};

/// Marbles in a winning run.
pub const WIN_LENGTH: usize = 5;

/// An ordered run of board positions (row, column or diagonal).
pub type Line = SmallVec<[Position; 6]>;

/// All six cells of a row, left to right.
#[must_use]
pub fn row_line(row: u8) -> Line {
    (0..BOARD_SIZE).map(|col| Position::new(row, col)).collect()
}

/// All six cells of a column, top to bottom.
#[must_use]
pub fn col_line(col: u8) -> Line {
    (0..BOARD_SIZE).map(|row| Position::new(row, col)).collect()
}

/// The two full diagonals through a position: `(rightward, leftward)`.
///
/// Rightward runs down-right (constant `row - col`), leftward runs
/// down-left (constant `row + col`); both are walked from their topmost
/// cell. Returns `None` for a position off the board.
#[must_use]
pub fn diagonals_through(position: Position) -> Option<(Line, Line)> {
    if !position.is_on_board() {
        return None;
    }
    let Position { row, col } = position;
    let last = BOARD_SIZE - 1;

    let back = row.min(col);
    let rightward = walk(Position::new(row - back, col - back), 1);

    let back = row.min(last - col);
    let leftward = walk(Position::new(row - back, col + back), -1);

    Some((rightward, leftward))
}

/// Walk down the board from `start`, stepping `d_col` columns per row.
fn walk(start: Position, d_col: i8) -> Line {
    std::iter::successors(Some(start), |p| p.offset(1, d_col)).collect()
}

/// Lines that a placement at `position` can complete.
///
/// Row, column and both diagonals through the cell.
#[must_use]
pub fn lines_through(position: Position) -> Vec<Line> {
    let mut lines = vec![row_line(position.row), col_line(position.col)];
    if let Some((rightward, leftward)) = diagonals_through(position) {
        lines.push(rightward);
        lines.push(leftward);
    }
    lines
}

/// Lines that rotating `quadrant` can complete.
///
/// The three rows and three columns crossing the quadrant, plus both
/// diagonals through the inner corner and through its left and right
/// neighbours. Those six diagonals cover every diagonal of length five or
/// more that enters the quadrant.
#[must_use]
pub fn lines_through_quadrant(quadrant: Quadrant) -> Vec<Line> {
    let center = quadrant.center();
    let mut lines = Vec::with_capacity(12);

    lines.extend((center.row - 1..=center.row + 1).map(row_line));
    lines.extend((center.col - 1..=center.col + 1).map(col_line));

    let corner = quadrant.inner_corner();
    for d_col in [-1, 0, 1] {
        let diagonals = corner.offset(0, d_col).and_then(diagonals_through);
        if let Some((rightward, leftward)) = diagonals {
            lines.push(rightward);
            lines.push(leftward);
        }
    }
    lines
}

/// Find a run of five same-colored marbles along a line.
///
/// Lines shorter than five never match. Empty cells break runs and never
/// count toward one. At most one color can be reported: a line has at most
/// six cells, so two different five-runs cannot coexist.
#[must_use]
pub fn five_in_a_row(board: &Board, line: &[Position]) -> Option<Color> {
    if line.len() < WIN_LENGTH {
        return None;
    }

    let mut previous = None;
    let mut run = 0;
    for &position in line {
        let color = board.get(position).color();
        if color.is_some() && color == previous {
            run += 1;
        } else {
            previous = color;
            run = 1;
        }
        if run == WIN_LENGTH {
            return color;
        }
    }
    None
}

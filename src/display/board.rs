//! Text rendering of the board.
//!
//! ```text
//!    0  1  2   |   3  4  5
//! a  -  -  -   |   -  -  -
//! b  -  ○  -   |   -  -  -
//! c  -  -  -   |   -  -  -
//!    ————————  |  ————————
//! d  -  -  -   |   -  ●  -
//! e  -  -  -   |   -  -  -
//! f  -  -  -   |   -  -  -
//!   ●  = white    ○  = black   -  = empty
//! ```

use std::fmt::Write;

use super::config::RenderConfig;
use crate::core::{Position, BOARD_SIZE};
use crate::games::pentago::Pentago;

const ROW_LABELS: [char; 6] = ['a', 'b', 'c', 'd', 'e', 'f'];
const QUADRANT_SPLIT: u8 = BOARD_SIZE / 2;
const COLUMN_DIVIDER: &str = " | ";
const ROW_DIVIDER: &str = "   ————————  |  ————————";

/// Draw the board with row letters, column digits and quadrant dividers.
///
/// Reads the game only through `cell_at`.
#[must_use]
pub fn render_board(game: &Pentago, config: &RenderConfig) -> String {
    let mut out = String::new();

    let header: Vec<String> = (0..BOARD_SIZE).map(|col| col.to_string()).collect();
    push_row(&mut out, ' ', header);

    for row in 0..BOARD_SIZE {
        let cells = (0..BOARD_SIZE)
            .map(|col| config.symbol(game.cell_at(Position::new(row, col))).to_string())
            .collect();
        push_row(&mut out, ROW_LABELS[row as usize], cells);

        if row + 1 == QUADRANT_SPLIT {
            out.push_str(ROW_DIVIDER);
            out.push('\n');
        }
    }

    if config.legend {
        // Infallible for String.
        let _ = writeln!(
            out,
            "  {}  = white    {}  = black   {}  = empty",
            config.white, config.black, config.empty
        );
    }
    out
}

fn push_row(out: &mut String, label: char, mut cells: Vec<String>) {
    cells.insert(QUADRANT_SPLIT as usize, COLUMN_DIVIDER.to_string());
    out.push(label);
    out.push_str("  ");
    out.push_str(&cells.join("  "));
    out.push('\n');
}

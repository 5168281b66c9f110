//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, LINES, Line};
use tracing::instrument;

/// Checks whether `cell` owns all three squares of any line.
///
/// Always false for [`Cell::Empty`].
pub fn is_winner(board: &Board, cell: Cell) -> bool {
    cell != Cell::Empty && LINES.iter().any(|line| owns_line(board, *line, cell))
}

/// Returns the first line (rows, then columns, then diagonals) owned by `cell`.
#[instrument]
pub fn winning_line(board: &Board, cell: Cell) -> Option<Line> {
    if cell == Cell::Empty {
        return None;
    }
    LINES
        .iter()
        .copied()
        .find(|line| owns_line(board, *line, cell))
}

fn owns_line(board: &Board, line: Line, cell: Cell) -> bool {
    line.iter().all(|&i| board.get(i) == Some(cell))
}

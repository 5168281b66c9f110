//! Legal move enumeration for tic-tac-toe.

use super::super::{Board, Cell};

/// Indices of empty cells in ascending order. Empty when the board is full.
pub fn available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .map(|(i, _)| i)
        .collect()
}

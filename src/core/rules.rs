//! # Win Detection
//!
//! Pure functions over a [`Board`]. The eight lines are checked in a fixed
//! order (rows, then columns, then diagonals) so results are deterministic.

use crate::core::board::{Board, Symbol};

/// Every three-in-a-row, in check order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line whose three cells hold the same non-empty symbol.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        let first = board.get(a);
        !first.is_empty() && first == board.get(b) && first == board.get(c)
    })
}

/// Returns the symbol that completed a line, if any.
pub fn detect_winner(board: &Board) -> Option<Symbol> {
    winning_line(board).map(|[a, _, _]| board.get(a))
}

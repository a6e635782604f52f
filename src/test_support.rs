//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::board::{Board, CELL_COUNT, Symbol};
use crate::core::state::GameState;

/// Builds a board from a 9-character string: `X`, `O`, anything else is empty.
pub fn board(cells: &str) -> Board {
    let mut out = [Symbol::Empty; CELL_COUNT];
    for (slot, c) in out.iter_mut().zip(cells.chars()) {
        *slot = match c {
            'X' => Symbol::X,
            'O' => Symbol::O,
            _ => Symbol::Empty,
        };
    }
    Board::from_cells(out)
}

/// Creates a game and plays the given cells in order.
pub fn played(cells: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &cell in cells {
        game.apply_move(cell);
    }
    game
}

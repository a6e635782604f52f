//! # Game State
//!
//! The single owner of game progress.
//!
//! ```text
//! GameState
//! ├── history: Vec<HistoryEntry>   // entry 0 is the empty board
//! └── current_step: usize          // which entry is on screen
//! ```
//!
//! Whose turn it is is never stored. It is derived from `current_step`
//! (even: X, odd: O), so it cannot drift away from the history pointer.
//!
//! Only two commands mutate the state: [`GameState::apply_move`] and
//! [`GameState::jump_to`]. Illegal commands are absorbed as no-ops.

use log::{debug, warn};

use crate::core::board::{Board, CELL_COUNT, Symbol, coords};
use crate::core::rules::detect_winner;

/// The board immediately after a move. Entry 0 holds the empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    /// Cell played to reach this board (None for the starting entry).
    pub last_move: Option<usize>,
}

impl HistoryEntry {
    fn start() -> Self {
        Self {
            board: Board::EMPTY,
            last_move: None,
        }
    }
}

/// What the status line shows for the board at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Won(Symbol),
    NextPlayer(Symbol),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    current_step: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_step: 0,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The board being viewed.
    pub fn current(&self) -> &Board {
        &self.history[self.current_step].board
    }

    pub fn next_player(&self) -> Symbol {
        Symbol::for_step(self.current_step)
    }

    pub fn winner(&self) -> Option<Symbol> {
        detect_winner(self.current())
    }

    pub fn status(&self) -> Status {
        match self.winner() {
            Some(symbol) => Status::Won(symbol),
            None => Status::NextPlayer(self.next_player()),
        }
    }

    /// Places the current player's symbol on `cell`.
    ///
    /// Ignored when the game at the current step is already won or the cell
    /// is occupied. Playing from a past step discards every later entry
    /// before the new one is appended.
    ///
    /// Returns `true` if the move was applied.
    pub fn apply_move(&mut self, cell: usize) -> bool {
        if cell >= CELL_COUNT {
            warn!("Ignoring move on out-of-range cell {}", cell);
            return false;
        }

        let current = *self.current();
        if let Some(winner) = detect_winner(&current) {
            debug!("Ignoring move on cell {}: {} already won", cell, winner);
            return false;
        }
        if !current.get(cell).is_empty() {
            debug!("Ignoring move on occupied cell {}", cell);
            return false;
        }

        let symbol = self.next_player();
        let board = current.with_symbol(cell, symbol);

        let discarded = self.history.len() - (self.current_step + 1);
        if discarded > 0 {
            debug!(
                "Discarding {} future entries after step {}",
                discarded, self.current_step
            );
        }
        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry {
            board,
            last_move: Some(cell),
        });
        self.current_step = self.history.len() - 1;

        debug!(
            "Step {}: {} on cell {} -> {}",
            self.current_step, symbol, cell, board
        );
        true
    }

    /// Moves the view to a recorded step without touching history.
    ///
    /// Returns `true` if `step` was a recorded step.
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.history.len() {
            warn!(
                "Ignoring jump to step {} (history has {} entries)",
                step,
                self.history.len()
            );
            return false;
        }
        debug!("Jumping from step {} to step {}", self.current_step, step);
        self.current_step = step;
        true
    }

    /// Label for the jump control of `step`.
    pub fn move_label(&self, step: usize) -> String {
        if step == 0 {
            return "Go to game start".to_string();
        }
        match self.history.get(step).and_then(|e| e.last_move) {
            Some(cell) => {
                let (row, col) = coords(cell);
                format!(
                    "Go to move #{} ({} at {},{})",
                    step,
                    Symbol::for_step(step - 1),
                    row + 1,
                    col + 1
                )
            }
            None => format!("Go to move #{}", step),
        }
    }
}

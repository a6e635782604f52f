//! # Board
//!
//! A board snapshot is nine cells in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! Snapshots are `Copy`. Playing a move never mutates a snapshot in place;
//! it produces a new one, which is what makes history entries immutable.

use std::fmt;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Width (and height) of the grid.
pub const SIDE: usize = 3;

/// What a single cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Symbol {
    #[default]
    Empty,
    X,
    O,
}

impl Symbol {
    /// The symbol whose turn it is at `step`: X on even steps, O on odd ones.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Symbol::X } else { Symbol::O }
    }

    pub fn is_empty(self) -> bool {
        self == Symbol::Empty
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
            Symbol::Empty => write!(f, " "),
        }
    }
}

/// Row and column (both 0-based) of a cell index.
pub fn coords(index: usize) -> (usize, usize) {
    (index / SIDE, index % SIDE)
}

/// One full board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Symbol; CELL_COUNT],
}

impl Board {
    /// The empty starting board.
    pub const EMPTY: Board = Board {
        cells: [Symbol::Empty; CELL_COUNT],
    };

    pub fn from_cells(cells: [Symbol; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Symbol at `index`, or `Empty` for indices off the board.
    pub fn get(&self, index: usize) -> Symbol {
        self.cells.get(index).copied().unwrap_or_default()
    }

    /// Returns a copy of this board with `index` set to `symbol`.
    pub fn with_symbol(&self, index: usize, symbol: Symbol) -> Board {
        let mut next = *self;
        next.cells[index] = symbol;
        next
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|s| !s.is_empty())
    }

    /// The three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Symbol]> {
        self.cells.chunks(SIDE)
    }
}

impl fmt::Display for Board {
    /// Compact one-line form, e.g. `XO.|.X.|..O`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            for symbol in row {
                match symbol {
                    Symbol::Empty => write!(f, ".")?,
                    other => write!(f, "{other}")?,
                }
            }
        }
        Ok(())
    }
}

//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! The game state has one owner (`core::state::GameState`). Components never
//! hold game data; they are rebuilt every frame from the current snapshot.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `CellView`: one square, draws a symbol
//! - `BoardView`: the 3×3 grid of `CellView`s, maps clicks to a cell index
//! - `StatusBar`: "Winner: X" / "Next player: O"
//!
//! ### Stateful Components (Event-Driven)
//!
//! These keep presentation state only (cursor, selection) and emit events:
//! - `BoardCursor`: keyboard cursor, emits `BoardEvent::Play(index)`
//! - `HistoryListState`: move list selection, emits `HistoryEvent::Jump(step)`
//!
//! ### Props-Based Data Flow
//!
//! ```text
//! GameState ──snapshot──▶ BoardView ──symbol──▶ CellView
//!     ▲                       │
//!     └──── Action::Play(i) ◀─┘  (click or key, via tui::dispatch)
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── cell.rs          (Single square)
//! ├── board.rs         (3×3 grid + cursor)
//! ├── history.rs       (Move list with jump controls)
//! └── status_bar.rs    (Winner / next player line)
//! ```

pub mod board;
pub mod cell;
pub mod history;
mod status_bar;

pub use board::{BoardCursor, BoardEvent, BoardView};
pub use cell::CellView;
pub use history::{HistoryEvent, HistoryList, HistoryListState};
pub use status_bar::StatusBar;

//! # Core Game Logic
//!
//! This module contains the rules and state of the game.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • GameState (history)  │
//!                    │  • Action (commands)    │
//!                    │  • update() (reducer)   │
//!                    │  • detect_winner()      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: `Symbol` and the 9-cell `Board` snapshot
//! - [`rules`]: win detection over a snapshot
//! - [`state`]: `GameState`, the move history and the step pointer
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings for the binary (not used by the game logic)

pub mod action;
pub mod board;
pub mod config;
pub mod rules;
pub mod state;

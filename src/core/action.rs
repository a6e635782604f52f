//! # Actions
//!
//! Everything that can happen in a game becomes an `Action`.
//! User clicks a cell? That's `Action::Play(index)`.
//! User picks an entry in the move list? That's `Action::JumpTo(step)`.
//!
//! The `update()` function applies an action to the state and returns an
//! [`Effect`] telling the frontend what to do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current player's symbol on a cell (0..9, row-major).
    Play(usize),
    /// View a recorded step.
    JumpTo(usize),
    Quit,
}

/// What the frontend should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// State changed; views need the new snapshot.
    Render,
    Quit,
}

pub fn update(state: &mut GameState, action: Action) -> Effect {
    debug!("Action: {:?} at step {}", action, state.current_step());
    let changed = match action {
        Action::Play(cell) => state.apply_move(cell),
        Action::JumpTo(step) => state.jump_to(step),
        Action::Quit => return Effect::Quit,
    };
    if changed { Effect::Render } else { Effect::None }
}

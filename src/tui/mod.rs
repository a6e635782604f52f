//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The game itself is mounted here: [`run`] owns the single `GameState`
//! for the lifetime of the session.
//!
//! ## Event Flow
//!
//! Everything is synchronous on one thread. Each event is fully handled
//! (state updated, frame redrawn) before the next one is read:
//!
//! ```text
//! crossterm event → TuiEvent → dispatch() → Action → update() → Effect → draw
//! ```
//!
//! Nothing animates, so the loop only redraws after an event that changed
//! something (or a terminal resize).

pub mod component;
pub mod components;
pub mod event;
pub mod theme;
pub mod ui;

use log::{debug, info, warn};
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::GameState;
use crate::tui::component::EventHandler;
use crate::tui::components::{BoardCursor, BoardEvent, HistoryEvent, HistoryListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;
use crate::tui::ui::Hit;

/// Which component receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Board,
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// TUI-specific presentation state (not part of the game)
pub struct TuiState {
    pub focus: Focus,
    pub board_cursor: BoardCursor,
    pub history: HistoryListState,
    pub theme: Theme,
    pub show_help: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            focus: Focus::Board,
            board_cursor: BoardCursor::default(),
            history: HistoryListState::new(),
            theme: Theme::default(),
            show_help: true,
        }
    }
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            focus: Focus::Board,
            board_cursor: BoardCursor::default(),
            history: HistoryListState::new(),
            theme: Theme::from_config(config),
            show_help: config.show_help,
        }
    }
}

struct TerminalModeGuard {
    mouse: bool,
}

impl TerminalModeGuard {
    fn new(mouse: bool) -> std::io::Result<Self> {
        if mouse {
            execute!(stdout(), EnableMouseCapture)?;
            info!("Terminal modes enabled (mouse capture)");
        }
        Ok(Self { mouse })
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
    }
}

/// Route one event to the game or to presentation state.
///
/// Returns the effect for the loop: `Render` whenever anything on screen
/// changed, `Quit` to leave.
pub fn dispatch(
    game: &mut GameState,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: Rect,
) -> Effect {
    match event {
        TuiEvent::Resize => Effect::Render,
        TuiEvent::Quit | TuiEvent::ForceQuit => update(game, Action::Quit),
        TuiEvent::ToggleFocus => {
            tui.focus = tui.focus.toggle();
            Effect::Render
        }
        TuiEvent::StepBack => match game.current_step().checked_sub(1) {
            Some(step) => apply(game, tui, Action::JumpTo(step)),
            None => Effect::None,
        },
        TuiEvent::StepForward => {
            let step = game.current_step() + 1;
            apply(game, tui, Action::JumpTo(step))
        }
        TuiEvent::MouseClick(column, row) => match ui::hit_test(frame_area, tui, column, row) {
            Some(Hit::Cell(index)) => {
                tui.focus = Focus::Board;
                tui.board_cursor.index = index;
                apply(game, tui, Action::Play(index));
                Effect::Render
            }
            Some(Hit::Step(step)) => {
                tui.focus = Focus::History;
                apply(game, tui, Action::JumpTo(step));
                Effect::Render
            }
            None => Effect::None,
        },
        // Digits always address the board
        TuiEvent::Digit(_) => {
            tui.focus = Focus::Board;
            dispatch_board(game, tui, &event)
        }
        _ => match tui.focus {
            Focus::Board => dispatch_board(game, tui, &event),
            Focus::History => match tui.history.handle_event(&event) {
                Some(HistoryEvent::Jump(step)) => {
                    apply(game, tui, Action::JumpTo(step));
                    Effect::Render
                }
                None => Effect::Render,
            },
        },
    }
}

fn dispatch_board(game: &mut GameState, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match tui.board_cursor.handle_event(event) {
        Some(BoardEvent::Play(index)) => {
            apply(game, tui, Action::Play(index));
            Effect::Render
        }
        // Cursor may have moved
        None => Effect::Render,
    }
}

/// Run a core action and keep the move list in step with the game.
fn apply(game: &mut GameState, tui: &mut TuiState, action: Action) -> Effect {
    let effect = update(game, action);
    if effect == Effect::Render {
        tui.history.sync(game);
    }
    effect
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let mut game = GameState::new();
    let mut tui = TuiState::new(config);

    let mut terminal = ratatui::init();
    let guard = match TerminalModeGuard::new(config.mouse) {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    let result = event_loop(&mut terminal, &mut game, &mut tui);

    drop(guard);
    ratatui::restore();
    info!(
        "Session ended at step {} of {}",
        game.current_step(),
        game.history().len()
    );
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    game: &mut GameState,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, game, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let frame_area = terminal.get_frame().area();
            match dispatch(game, tui, event, frame_area) {
                Effect::Quit => {
                    debug!("Quit requested");
                    return Ok(());
                }
                Effect::Render => needs_redraw = true,
                Effect::None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Symbol;
    use crate::test_support::played;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn send(game: &mut GameState, tui: &mut TuiState, events: &[TuiEvent]) -> Effect {
        let mut last = Effect::None;
        for &event in events {
            last = dispatch(game, tui, event, AREA);
        }
        last
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut game = GameState::new();
        let mut tui = TuiState::default();
        send(&mut game, &mut tui, &[TuiEvent::CursorUp, TuiEvent::Activate]);
        assert_eq!(game.current().get(1), Symbol::X);
        assert_eq!(tui.history.selected, 1);
    }

    #[test]
    fn test_digit_plays_even_when_history_focused() {
        let mut game = GameState::new();
        let mut tui = TuiState::default();
        send(&mut game, &mut tui, &[TuiEvent::ToggleFocus, TuiEvent::Digit(9)]);
        assert_eq!(game.current().get(8), Symbol::X);
        assert_eq!(tui.focus, Focus::Board);
    }

    #[test]
    fn test_history_focus_jumps() {
        let mut game = played(&[0, 1, 2]);
        let mut tui = TuiState::default();
        tui.history.sync(&game);
        send(
            &mut game,
            &mut tui,
            &[
                TuiEvent::ToggleFocus,
                TuiEvent::CursorUp,
                TuiEvent::CursorUp,
                TuiEvent::Activate,
            ],
        );
        assert_eq!(game.current_step(), 1);
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_step_keys_walk_history() {
        let mut game = played(&[0, 1]);
        let mut tui = TuiState::default();
        send(&mut game, &mut tui, &[TuiEvent::StepBack, TuiEvent::StepBack]);
        assert_eq!(game.current_step(), 0);
        assert_eq!(send(&mut game, &mut tui, &[TuiEvent::StepBack]), Effect::None);
        send(&mut game, &mut tui, &[TuiEvent::StepForward]);
        assert_eq!(game.current_step(), 1);
        send(&mut game, &mut tui, &[TuiEvent::StepForward, TuiEvent::StepForward]);
        assert_eq!(game.current_step(), 2);
    }

    #[test]
    fn test_mouse_click_on_cell_plays() {
        let mut game = GameState::new();
        let mut tui = TuiState::default();
        let areas = ui::layout(AREA, &tui.theme, tui.show_help);
        let rect = components::BoardView::cell_rects(areas.board)[6];
        send(&mut game, &mut tui, &[TuiEvent::MouseClick(rect.x + 2, rect.y + 1)]);
        assert_eq!(game.current().get(6), Symbol::X);
        assert_eq!(tui.board_cursor.index, 6);
    }

    #[test]
    fn test_mouse_click_on_history_jumps() {
        let mut game = played(&[0, 1, 2]);
        let mut tui = TuiState::default();
        tui.history.sync(&game);
        let areas = ui::layout(AREA, &tui.theme, tui.show_help);
        // First entry row inside the border: game start
        send(
            &mut game,
            &mut tui,
            &[TuiEvent::MouseClick(areas.history.x + 3, areas.history.y + 1)],
        );
        assert_eq!(game.current_step(), 0);
        assert_eq!(tui.focus, Focus::History);
    }

    #[test]
    fn test_click_outside_is_ignored() {
        let mut game = GameState::new();
        let mut tui = TuiState::default();
        assert_eq!(
            send(&mut game, &mut tui, &[TuiEvent::MouseClick(79, 23)]),
            Effect::None
        );
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_quit() {
        let mut game = GameState::new();
        let mut tui = TuiState::default();
        assert_eq!(send(&mut game, &mut tui, &[TuiEvent::Quit]), Effect::Quit);
        assert_eq!(send(&mut game, &mut tui, &[TuiEvent::ForceQuit]), Effect::Quit);
    }
}

//! # History Component
//!
//! The move list: one jump control per recorded step. Choosing an entry
//! (Enter on the selection, or a mouse click) emits [`HistoryEvent::Jump`],
//! which the game turns into `jump_to`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HistoryListState` lives in `TuiState`
//! - `HistoryList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::core::state::GameState;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent state for the move list.
pub struct HistoryListState {
    pub selected: usize,
    /// Number of recorded steps, refreshed by `sync`
    pub len: usize,
    pub list_state: ListState,
}

impl Default for HistoryListState {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryListState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            len: 1,
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    /// Adopt the game's history length and move the selection to `step`.
    pub fn sync(&mut self, game: &GameState) {
        self.len = game.history().len();
        self.select(game.current_step());
    }

    pub fn select(&mut self, step: usize) {
        self.selected = step.min(self.len.saturating_sub(1));
        self.list_state.select(Some(self.selected));
    }

    /// First visible entry (scroll offset of the list).
    pub fn offset(&self) -> usize {
        self.list_state.offset()
    }
}

/// Events emitted by the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    Jump(usize),
}

impl EventHandler for HistoryListState {
    type Event = HistoryEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<HistoryEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select(self.selected + 1);
                None
            }
            TuiEvent::Activate => Some(HistoryEvent::Jump(self.selected)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the move list.
pub struct HistoryList<'a> {
    game: &'a GameState,
    state: &'a mut HistoryListState,
    focused: bool,
}

impl<'a> HistoryList<'a> {
    pub fn new(game: &'a GameState, state: &'a mut HistoryListState, focused: bool) -> Self {
        Self {
            game,
            state,
            focused,
        }
    }

    fn block(focused: bool) -> Block<'static> {
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::bordered().title(" Moves ").border_style(border)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let current = self.game.current_step();
        let items: Vec<ListItem> = (0..self.game.history().len())
            .map(|step| {
                let is_current = step == current;
                let marker = if is_current { "▶ " } else { "  " };
                let style = if is_current {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(format!("{:>2}. ", step + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(self.game.move_label(step), style),
                ]))
            })
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(Self::block(self.focused))
            .highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }

    /// Step under a screen position, given the list's scroll offset.
    pub fn step_at(area: Rect, offset: usize, len: usize, column: u16, row: u16) -> Option<usize> {
        let inner = Self::block(false).inner(area);
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let step = offset + (row - inner.y) as usize;
        (step < len).then_some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::played;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_sync_follows_current_step() {
        let mut game = played(&[0, 1, 2]);
        let mut state = HistoryListState::new();
        state.sync(&game);
        assert_eq!(state.len, 4);
        assert_eq!(state.selected, 3);
        game.jump_to(1);
        state.sync(&game);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_selection_is_clamped() {
        let game = played(&[0, 1]);
        let mut state = HistoryListState::new();
        state.sync(&game);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 2);
        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorUp);
        }
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_activate_jumps_to_selection() {
        let game = played(&[0, 1, 2]);
        let mut state = HistoryListState::new();
        state.sync(&game);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(
            state.handle_event(&TuiEvent::Activate),
            Some(HistoryEvent::Jump(2))
        );
    }

    #[test]
    fn test_step_at() {
        let area = Rect::new(10, 0, 30, 8);
        // Inner area starts one row and one column in
        assert_eq!(HistoryList::step_at(area, 0, 3, 12, 1), Some(0));
        assert_eq!(HistoryList::step_at(area, 0, 3, 12, 3), Some(2));
        assert_eq!(HistoryList::step_at(area, 0, 3, 12, 4), None);
        assert_eq!(HistoryList::step_at(area, 2, 5, 12, 2), Some(3));
        assert_eq!(HistoryList::step_at(area, 0, 3, 10, 1), None);
        assert_eq!(HistoryList::step_at(area, 0, 3, 12, 0), None);
    }

    #[test]
    fn test_render_lists_every_step() {
        let game = played(&[4, 0]);
        let mut state = HistoryListState::new();
        state.sync(&game);

        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                HistoryList::new(&game, &mut state, true).render(f, area);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Moves"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("Go to move #1"));
        assert!(text.contains("Go to move #2"));
        assert!(text.contains('▶'));
    }
}

//! # StatusBar Component
//!
//! One line above the move list: who has won, or who moves next, plus where
//! the view sits in the history.
//!
//! ## Conditional Formatting
//!
//! 1. **Decided**: `"Winner: X | Step 5 of 5"`
//! 2. **In progress**: `"Next player: O | Step 1 of 4"`
//!
//! A full board without a line is still "in progress": there is no draw
//! announcement.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::Status;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Stateless status line. All fields are props.
pub struct StatusBar<'a> {
    pub status: Status,
    pub theme: &'a Theme,
    /// Step on screen (0-based)
    pub step: usize,
    /// Number of recorded steps
    pub total: usize,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: Status, theme: &'a Theme, step: usize, total: usize) -> Self {
        Self {
            status,
            theme,
            step,
            total,
        }
    }

    fn spans(&self) -> Vec<Span<'a>> {
        let (label, symbol) = match self.status {
            Status::Won(symbol) => ("Winner: ", symbol),
            Status::NextPlayer(symbol) => ("Next player: ", symbol),
        };
        let mut symbol_style = self.theme.style(symbol).add_modifier(Modifier::BOLD);
        if matches!(self.status, Status::Won(_)) {
            symbol_style = symbol_style.add_modifier(Modifier::REVERSED);
        }
        vec![
            Span::raw(label),
            Span::styled(symbol.to_string(), symbol_style),
            Span::styled(
                format!(" | Step {} of {}", self.step + 1, self.total),
                Style::default().fg(Color::DarkGray),
            ),
        ]
    }
}

impl Component for StatusBar<'_> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Line::from(self.spans()), area);
    }
}

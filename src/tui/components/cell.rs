//! # Cell Component
//!
//! One square of the board. Purely presentational: it receives the symbol and
//! highlight flags as props and draws them. Clicks are not handled here; the
//! parent [`BoardView`](super::board::BoardView) maps a click position to a
//! cell index and forwards it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::board::Symbol;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

#[derive(Clone, Copy)]
pub struct CellView<'a> {
    /// Position on the board (0-8)
    pub index: usize,
    pub symbol: Symbol,
    pub theme: &'a Theme,
    /// Keyboard cursor is on this cell
    pub is_cursor: bool,
    /// Part of the completed line
    pub is_winning: bool,
    /// Draw the `1`-`9` key for this cell while it is empty
    pub show_hint: bool,
}

impl<'a> CellView<'a> {
    pub fn new(index: usize, symbol: Symbol, theme: &'a Theme) -> Self {
        Self {
            index,
            symbol,
            theme,
            is_cursor: false,
            is_winning: false,
            show_hint: false,
        }
    }

    pub fn cursor(mut self, is_cursor: bool) -> Self {
        self.is_cursor = is_cursor;
        self
    }

    pub fn winning(mut self, is_winning: bool) -> Self {
        self.is_winning = is_winning;
        self
    }

    pub fn hint(mut self, show_hint: bool) -> Self {
        self.show_hint = show_hint;
        self
    }

    fn border_style(&self) -> Style {
        if self.is_cursor {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if self.is_winning {
            self.theme.style(self.symbol)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn content(&self) -> Span<'a> {
        if self.symbol.is_empty() {
            if !self.show_hint {
                return Span::raw("");
            }
            return Span::styled(
                (self.index + 1).to_string(),
                self.theme.style(Symbol::Empty),
            );
        }
        let mut style = self.theme.style(self.symbol);
        if self.is_winning {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Span::styled(self.theme.glyph(self.symbol), style)
    }
}

impl Component for CellView<'_> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(self.border_style());
        let inner = block.inner(area);

        // Pad from the top so the glyph sits on the middle row
        let pad = inner.height.saturating_sub(1) / 2;
        let mut lines: Vec<Line> = (0..pad).map(|_| Line::default()).collect();
        lines.push(Line::from(self.content()));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

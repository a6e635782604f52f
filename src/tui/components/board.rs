//! # Board Component
//!
//! Lays out nine [`CellView`]s in a 3×3 grid and turns clicks and key presses
//! into a cell index for the game.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BoardCursor` lives in `TuiState` (keyboard selection only)
//! - `BoardView` is created each frame with the current snapshot as props

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::core::board::{Board, CELL_COUNT, SIDE};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::cell::CellView;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Rows per cell: border, glyph, border.
const CELL_HEIGHT: u16 = 3;
/// Smallest cell width, borders included.
const MIN_CELL_WIDTH: u16 = 7;

/// Keyboard cursor over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCursor {
    pub index: usize,
}

impl Default for BoardCursor {
    fn default() -> Self {
        // Start in the centre
        Self { index: 4 }
    }
}

/// Events emitted by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// A cell was chosen; the game decides whether the move is legal.
    Play(usize),
}

impl BoardCursor {
    fn shift(&mut self, d_row: isize, d_col: isize) {
        let side = SIDE as isize;
        let row = (self.index / SIDE) as isize + d_row;
        let col = (self.index % SIDE) as isize + d_col;
        if (0..side).contains(&row) && (0..side).contains(&col) {
            self.index = (row * side + col) as usize;
        }
    }
}

impl EventHandler for BoardCursor {
    type Event = BoardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<BoardEvent> {
        match *event {
            TuiEvent::CursorUp => self.shift(-1, 0),
            TuiEvent::CursorDown => self.shift(1, 0),
            TuiEvent::CursorLeft => self.shift(0, -1),
            TuiEvent::CursorRight => self.shift(0, 1),
            TuiEvent::Activate => return Some(BoardEvent::Play(self.index)),
            TuiEvent::Digit(n) if (1..=CELL_COUNT as u8).contains(&n) => {
                self.index = (n - 1) as usize;
                return Some(BoardEvent::Play(self.index));
            }
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the board.
pub struct BoardView<'a> {
    pub board: &'a Board,
    pub theme: &'a Theme,
    /// Cursor to highlight (None when the board is not focused)
    pub cursor: Option<usize>,
    pub winning_line: Option<[usize; 3]>,
    /// Key hints in empty cells (follows the help bar setting)
    pub show_hints: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board, theme: &'a Theme) -> Self {
        Self {
            board,
            theme,
            cursor: None,
            winning_line: None,
            show_hints: false,
        }
    }

    /// Width and height the board needs, outer border included.
    pub fn preferred_size(theme: &Theme) -> (u16, u16) {
        let cell_width = MIN_CELL_WIDTH.max(theme.glyph_width().saturating_add(4));
        let width = cell_width.saturating_mul(SIDE as u16).saturating_add(2);
        (width, CELL_HEIGHT * SIDE as u16 + 2)
    }

    fn block() -> Block<'static> {
        Block::bordered()
            .title(" Board ")
            .border_style(Style::default().fg(Color::DarkGray))
    }

    /// Screen rectangles of the nine cells, row-major.
    pub fn cell_rects(area: Rect) -> [Rect; CELL_COUNT] {
        let inner = Self::block().inner(area);
        let thirds = [Constraint::Ratio(1, 3); SIDE];
        let rows: [Rect; SIDE] = Layout::vertical(thirds).areas(inner);

        let mut rects = [Rect::default(); CELL_COUNT];
        for (r, row) in rows.into_iter().enumerate() {
            let cols: [Rect; SIDE] = Layout::horizontal(thirds).areas(row);
            for (c, cell) in cols.into_iter().enumerate() {
                rects[r * SIDE + c] = cell;
            }
        }
        rects
    }

    /// Cell index under a screen position, if any.
    pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        Self::cell_rects(area)
            .iter()
            .position(|rect| rect.contains(position))
    }
}

impl Component for BoardView<'_> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Self::block(), area);

        for (index, rect) in Self::cell_rects(area).into_iter().enumerate() {
            let is_winning = self
                .winning_line
                .is_some_and(|line| line.contains(&index));
            CellView::new(index, self.board.get(index), self.theme)
                .cursor(self.cursor == Some(index))
                .winning(is_winning)
                .hint(self.show_hints)
                .render(frame, rect);
        }
    }
}

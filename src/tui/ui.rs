use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::rules::winning_line;
use crate::core::state::GameState;
use crate::tui::component::Component;
use crate::tui::components::{BoardView, HistoryList, StatusBar};
use crate::tui::theme::Theme;
use crate::tui::{Focus, TuiState};

const HELP_TEXT: &str =
    " ←↑↓→ move  Enter play/jump  1-9 play  Tab switch  [ ] step  q quit ";

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    pub board: Rect,
    pub status: Rect,
    pub history: Rect,
    pub help: Rect,
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Cell(usize),
    Step(usize),
}

pub fn layout(area: Rect, theme: &Theme, show_help: bool) -> GameLayout {
    use Constraint::{Length, Min};

    let help_height = if show_help { 1 } else { 0 };
    let [main, help] = Layout::vertical([Min(0), Length(help_height)]).areas(area);

    let (board_width, board_height) = BoardView::preferred_size(theme);
    let [board_column, _gap, info] =
        Layout::horizontal([Length(board_width), Length(1), Min(0)]).areas(main);
    let [board, _] = Layout::vertical([Length(board_height), Min(0)]).areas(board_column);
    let [status, history] = Layout::vertical([Length(1), Min(0)]).areas(info);

    GameLayout {
        board,
        status,
        history,
        help,
    }
}

pub fn draw_ui(frame: &mut Frame, game: &GameState, tui: &mut TuiState) {
    let areas = layout(frame.area(), &tui.theme, tui.show_help);
    let board = game.current();

    let mut board_view = BoardView::new(board, &tui.theme);
    board_view.winning_line = winning_line(board);
    board_view.show_hints = tui.show_help;
    if tui.focus == Focus::Board {
        board_view.cursor = Some(tui.board_cursor.index);
    }
    board_view.render(frame, areas.board);

    StatusBar::new(
        game.status(),
        &tui.theme,
        game.current_step(),
        game.history().len(),
    )
    .render(frame, areas.status);

    HistoryList::new(game, &mut tui.history, tui.focus == Focus::History)
        .render(frame, areas.history);

    if tui.show_help {
        let help = Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)));
        frame.render_widget(help, areas.help);
    }
}

/// Hit test: given a screen position, find the cell or history entry under it.
pub fn hit_test(frame_area: Rect, tui: &TuiState, column: u16, row: u16) -> Option<Hit> {
    let areas = layout(frame_area, &tui.theme, tui.show_help);
    if let Some(cell) = BoardView::cell_at(areas.board, column, row) {
        return Some(Hit::Cell(cell));
    }
    HistoryList::step_at(
        areas.history,
        tui.history.offset(),
        tui.history.len,
        column,
        row,
    )
    .map(Hit::Step)
}

use tictactoe::core::action::{Action, Effect, update};
use tictactoe::core::board::{Board, CELL_COUNT, Symbol};
use tictactoe::core::rules::detect_winner;
use tictactoe::core::state::{GameState, Status};

// ============================================================================
// Helper Functions
// ============================================================================

/// Plays each cell in order, asserting every move is accepted.
fn play_all(game: &mut GameState, cells: &[usize]) {
    for &cell in cells {
        assert_eq!(
            update(game, Action::Play(cell)),
            Effect::Render,
            "move on cell {cell} was rejected"
        );
    }
}

/// The single cell that changed between two consecutive snapshots.
fn changed_cell(prev: &Board, next: &Board) -> usize {
    let changed: Vec<usize> = (0..CELL_COUNT)
        .filter(|&i| prev.get(i) != next.get(i))
        .collect();
    assert_eq!(changed.len(), 1, "{prev} -> {next}");
    changed[0]
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_column_win_blocks_further_moves() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 1, 3, 4, 6]);

    assert_eq!(detect_winner(game.current()), Some(Symbol::X));
    assert_eq!(game.status(), Status::Won(Symbol::X));

    assert_eq!(update(&mut game, Action::Play(2)), Effect::None);
    assert_eq!(game.history().len(), 6);
    assert!(game.current().get(2).is_empty());
}

#[test]
fn test_full_board_without_winner() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 1, 2, 3, 5, 6, 7, 8, 4]);

    assert_eq!(detect_winner(game.current()), None);
    assert!(game.current().is_full());

    let before = game.clone();
    for cell in 0..CELL_COUNT {
        assert_eq!(update(&mut game, Action::Play(cell)), Effect::None);
    }
    assert_eq!(game, before);
}

#[test]
fn test_jump_back_shows_past_board_and_turn() {
    let mut game = GameState::new();
    play_all(&mut game, &[4, 0, 8, 2]);

    assert_eq!(update(&mut game, Action::JumpTo(1)), Effect::Render);
    assert_eq!(game.current(), &game.history()[1].board);
    assert_eq!(game.next_player(), Symbol::O);
    assert_eq!(game.status(), Status::NextPlayer(Symbol::O));
    // Nothing was discarded by the jump itself
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_new_move_after_jump_discards_future() {
    let mut game = GameState::new();
    play_all(&mut game, &[4, 0, 8, 2]);
    let kept: Vec<Board> = game.history()[..=2].iter().map(|e| e.board).collect();

    update(&mut game, Action::JumpTo(2));
    play_all(&mut game, &[6]);

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_step(), 3);
    let prefix: Vec<Board> = game.history()[..=2].iter().map(|e| e.board).collect();
    assert_eq!(prefix, kept);
    assert_eq!(game.current().get(6), Symbol::X);
    assert!(game.current().get(2).is_empty());
}

#[test]
fn test_occupied_cell_twice_equals_once() {
    let mut once = GameState::new();
    play_all(&mut once, &[4]);
    update(&mut once, Action::Play(4));

    let mut twice = once.clone();
    update(&mut twice, Action::Play(4));

    assert_eq!(once, twice);
}

#[test]
fn test_history_length_tracks_moves() {
    let cells = [4, 0, 8, 2, 1, 7, 6];
    let mut game = GameState::new();
    for (n, &cell) in cells.iter().enumerate() {
        play_all(&mut game, &[cell]);
        assert_eq!(game.history().len(), n + 2);
        assert_eq!(game.current_step(), n + 1);
    }
}

#[test]
fn test_turns_alternate_across_history() {
    let mut game = GameState::new();
    play_all(&mut game, &[4, 0, 8, 2, 1]);
    // Branch from step 3 to make sure alternation survives truncation
    update(&mut game, Action::JumpTo(3));
    play_all(&mut game, &[6, 7]);

    let history = game.history();
    assert_eq!(history[0].board, Board::EMPTY);
    for (i, pair) in history.windows(2).enumerate() {
        let cell = changed_cell(&pair[0].board, &pair[1].board);
        let expected = if i % 2 == 0 { Symbol::X } else { Symbol::O };
        assert_eq!(pair[1].board.get(cell), expected, "move {i}");
        assert_eq!(pair[1].last_move, Some(cell));
    }
}

#[test]
fn test_time_travel_after_win_is_allowed() {
    let mut game = GameState::new();
    play_all(&mut game, &[0, 1, 3, 4, 6]);

    assert_eq!(update(&mut game, Action::JumpTo(0)), Effect::Render);
    assert_eq!(game.current(), &Board::EMPTY);
    assert_eq!(update(&mut game, Action::JumpTo(5)), Effect::Render);
    assert_eq!(game.winner(), Some(Symbol::X));
}

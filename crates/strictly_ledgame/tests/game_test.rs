//! Tests for the game state machine.

use strictly_ledgame::rules::winning_line;
use strictly_ledgame::{
    Board, Cell, Game, GameEvent, GameInvariants, GameState, InvariantSet, Outcome, Player,
    Position, WIN_LINES,
};

/// Walks the cursor to `target` and selects it.
fn play(game: &mut Game, target: Position) -> GameEvent {
    for _ in 0..Position::ALL.len() {
        if game.state().selected_tile() == target {
            break;
        }
        let _ = game.advance_cursor();
    }
    assert_eq!(game.state().selected_tile(), target, "cursor never reached {target}");
    game.select_current_tile()
}

fn play_all(game: &mut Game, tiles: &[Position]) -> Vec<GameEvent> {
    tiles.iter().map(|&tile| play(game, tile)).collect()
}

const TIE: [Position; 9] = [
    Position::TopLeft,
    Position::Center,
    Position::TopRight,
    Position::TopCenter,
    Position::MiddleLeft,
    Position::MiddleRight,
    Position::BottomCenter,
    Position::BottomLeft,
    Position::BottomRight,
];

#[test]
fn test_end_to_end_player_one_wins_top_row() {
    let mut game = Game::new();
    let events = play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ],
    );

    assert_eq!(
        events.last(),
        Some(&GameEvent::GameWon {
            player: Player::One,
            tile: Position::TopRight,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        })
    );

    let one = Cell::Owned(Player::One);
    let two = Cell::Owned(Player::Two);
    let empty = Cell::Empty;
    assert_eq!(game.state().outcome(), Outcome::Won(Player::One));
    assert_eq!(
        game.state().board().cells(),
        &[one, one, one, empty, two, two, empty, empty, empty]
    );
    assert_eq!(game.state().move_count(), 5);
}

#[test]
fn test_tie_game() {
    let mut game = Game::new();
    let events = play_all(&mut game, &TIE);

    assert_eq!(
        events.last(),
        Some(&GameEvent::GameTied {
            player: Player::One,
            tile: Position::BottomRight,
        })
    );
    assert_eq!(game.state().outcome(), Outcome::Tied);
    assert_eq!(game.state().move_count(), 9);
}

#[test]
fn test_turns_alternate_and_cursor_advances() {
    let mut game = Game::new();
    let event = game.select_current_tile();
    assert_eq!(
        event,
        GameEvent::MarkPlaced {
            player: Player::One,
            tile: Position::TopLeft,
            next_player: Player::Two,
            cursor: Position::TopCenter,
        }
    );
    assert_eq!(game.state().current_player(), Player::Two);
    assert_eq!(game.state().selected_tile(), Position::TopCenter);
}

#[test]
fn test_cursor_wraps_past_end() {
    let mut game = Game::new();
    let _ = play(&mut game, Position::BottomRight);
    // Player two's cursor wraps from 8 to 0.
    assert_eq!(game.state().selected_tile(), Position::TopLeft);
}

#[test]
fn test_cursor_stays_on_last_empty_tile() {
    let mut game = Game::new();
    play_all(&mut game, &TIE[..8]);
    assert_eq!(game.state().selected_tile(), Position::BottomRight);

    let event = game.advance_cursor();
    assert_eq!(
        event,
        GameEvent::CursorMoved {
            from: Position::BottomRight,
            to: Position::BottomRight,
        }
    );
    assert!(!event.needs_render());
}

#[test]
fn test_reset_is_idempotent() {
    let mut game = Game::new();
    play_all(&mut game, &TIE[..4]);
    let _ = game.tick_flash(500);

    assert_eq!(game.reset(), GameEvent::Reset);
    assert_eq!(game.state(), &GameState::new());

    let _ = game.reset();
    assert_eq!(game.state(), &GameState::new());
}

#[test]
fn test_reset_after_win() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
            Position::BottomRight,
        ],
    );
    assert_eq!(game.state().outcome(), Outcome::Won(Player::One));

    let _ = game.reset();
    assert_eq!(game.state(), &GameState::new());
}

#[test]
fn test_terminal_state_is_frozen() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ],
    );
    let frozen = game.state().clone();

    assert_eq!(game.select_current_tile(), GameEvent::GameOver);
    assert_eq!(game.advance_cursor(), GameEvent::GameOver);
    assert_eq!(game.tick_flash(5_000), GameEvent::Unchanged);
    assert_eq!(game.state(), &frozen);
    assert_eq!(game.state().current_player(), Player::One);
    assert_eq!(game.state().selected_tile(), Position::TopRight);
}

#[test]
fn test_move_count_invariant_through_play() {
    let mut game = Game::new();
    for &tile in &TIE {
        let _ = play(&mut game, tile);
        let state = game.state();
        let occupied = state
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();
        assert_eq!(usize::from(state.move_count()), occupied);
        assert!(GameInvariants::check_all(state).is_ok());
    }
}

#[test]
fn test_reset_frees_tiles() {
    let mut game = Game::new();
    let _ = game.select_current_tile();
    let _ = game.reset();
    // After reset the same tile is free again.
    assert!(matches!(
        game.select_current_tile(),
        GameEvent::MarkPlaced { .. }
    ));
}

#[test]
fn test_win_detection_every_line() {
    for line in WIN_LINES {
        for player in [Player::One, Player::Two] {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Cell::Owned(player));
            }
            // Fill one leftover cell with the opponent.
            if let Some(other) = Position::ALL.iter().find(|p| !line.contains(p)) {
                board.set(*other, Cell::Owned(player.opponent()));
            }
            assert_eq!(winning_line(&board), Some((player, line)));
        }
    }
}

#[test]
fn test_full_board_without_line_is_tie() {
    let mut game = Game::new();
    play_all(&mut game, &TIE);
    assert!(winning_line(game.state().board()).is_none());
    assert_eq!(game.state().outcome(), Outcome::Tied);
}

#[test]
fn test_flash_toggling() {
    let mut game = Game::new();
    assert!(!game.state().cursor_flash_on());

    assert_eq!(game.tick_flash(500), GameEvent::FlashToggled { on: true });
    assert!(game.state().cursor_flash_on());

    assert_eq!(game.tick_flash(200), GameEvent::Unchanged);
    assert!(game.state().cursor_flash_on());

    assert_eq!(game.tick_flash(300), GameEvent::FlashToggled { on: false });
    assert!(!game.state().cursor_flash_on());
}

#[test]
fn test_independent_games() {
    let mut a = Game::new();
    let b = Game::new();
    let _ = a.select_current_tile();
    assert_eq!(a.state().move_count(), 1);
    assert_eq!(b.state().move_count(), 0);
}

#[test]
fn test_snapshot_serializes() {
    let mut game = Game::new();
    let _ = game.select_current_tile();
    let json = serde_json::to_string(game.state()).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, game.state());
}

#[test]
fn test_tile_index_error_reports_caller() {
    let line = line!() + 1;
    let err = Position::try_from(9).unwrap_err();
    assert_eq!(err.line, line);
    assert!(err.file.ends_with("game_test.rs"), "{}", err.file);
}

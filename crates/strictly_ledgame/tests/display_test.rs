//! Tests for the display encoder.

use strictly_ledgame::{Color, DrivePair, Frame, Game, GameState, Player, Position, encode};

fn play(game: &mut Game, target: Position) {
    while game.state().selected_tile() != target {
        let _ = game.advance_cursor();
    }
    let _ = game.select_current_tile();
}

#[test]
fn test_markers_use_player_colors() {
    let mut game = Game::new();
    play(&mut game, Position::TopLeft);
    play(&mut game, Position::Center);

    let frame = encode(game.state());
    assert_eq!(frame.get(Position::TopLeft), DrivePair::lit(Color::Red));
    assert_eq!(frame.get(Position::Center), DrivePair::lit(Color::Green));
    assert_eq!(frame.lit_count(), 2);
}

#[test]
fn test_flash_marks_cursor_with_current_player() {
    let mut game = Game::new();
    play(&mut game, Position::TopLeft);
    let _ = game.tick_flash(500);

    let state = game.state();
    assert_eq!(state.current_player(), Player::Two);
    let frame = encode(state);
    assert_eq!(frame.get(state.selected_tile()), DrivePair::lit(Color::Green));

    let _ = game.tick_flash(500);
    let frame = encode(game.state());
    assert_eq!(frame.get(game.state().selected_tile()), DrivePair::OFF);
}

#[test]
fn test_win_celebration_fills_board() {
    let mut game = Game::new();
    for tile in [
        Position::TopCenter,
        Position::TopLeft,
        Position::Center,
        Position::MiddleLeft,
        Position::BottomRight,
        Position::BottomLeft,
    ] {
        play(&mut game, tile);
    }
    assert_eq!(
        game.state().outcome(),
        strictly_ledgame::Outcome::Won(Player::Two)
    );
    assert_eq!(encode(game.state()), Frame::solid(Color::Green));
}

#[test]
fn test_tie_shows_literal_board() {
    let mut game = Game::new();
    for tile in [
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ] {
        play(&mut game, tile);
    }

    let frame = encode(game.state());
    for pos in Position::ALL {
        assert_eq!(frame.get(pos), DrivePair::from(game.state().board().get(pos)));
    }
    assert_eq!(frame.lit_count(), 9);
    assert_ne!(frame, Frame::solid(Color::Red));
}

#[test]
fn test_encode_is_pure() {
    let mut game = Game::new();
    play(&mut game, Position::Center);
    let _ = game.tick_flash(500);

    let first = encode(game.state());
    let second = encode(game.state());
    assert_eq!(first, second);
    assert_eq!(encode(&GameState::new()), Frame::BLANK);
}

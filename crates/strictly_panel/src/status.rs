//! Human-readable status lines for game events.
//!
//! The engine only reports structured events; this is where they become
//! the messages an operator reads.

use strictly_ledgame::{Board, Cell, GameEvent, GameState, Player};
use tracing::info;

/// Message describing `event`, or `None` for events not worth a line.
pub fn describe(event: &GameEvent) -> Option<String> {
    let line = match event {
        GameEvent::Reset => "New game. Player 1's turn".to_string(),
        GameEvent::MarkPlaced {
            player,
            tile,
            next_player,
            ..
        } => format!(
            "{} chose tile {} ({}). {}'s turn",
            player,
            tile.to_index() + 1,
            tile,
            next_player
        ),
        GameEvent::TileOccupied { tile, owner } => format!(
            "Tile {} is already taken by {}",
            tile.to_index() + 1,
            owner
        ),
        GameEvent::GameWon { player, .. } => format!("{} wins!", player),
        GameEvent::GameTied { .. } => "Tie game!".to_string(),
        GameEvent::GameOver => "Game over. Press reset to play again".to_string(),
        GameEvent::CursorMoved { .. } | GameEvent::FlashToggled { .. } | GameEvent::Unchanged => {
            return None;
        }
    };
    Some(line)
}

fn marker(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Owned(Player::One) => '1',
        Cell::Owned(Player::Two) => '2',
    }
}

/// Renders the board as three rows, e.g. `1|.|2`.
pub fn render_board(board: &Board) -> String {
    board
        .cells()
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&cell| marker(cell).to_string())
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n-+-+-\n")
}

/// Emits the status line for `event` through tracing.
///
/// Moves and game endings also log the board.
pub fn log_event(event: &GameEvent, state: &GameState) {
    let Some(message) = describe(event) else {
        return;
    };
    info!(
        outcome = %state.outcome(),
        moves = state.move_count(),
        "{}",
        message
    );
    if matches!(
        event,
        GameEvent::MarkPlaced { .. } | GameEvent::GameWon { .. } | GameEvent::GameTied { .. }
    ) {
        info!("\n{}", render_board(state.board()));
    }
}

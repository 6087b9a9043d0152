//! Cursor invariant: an active game never points the cursor at a marker.

use super::Invariant;
use crate::GameState;

/// Invariant: while in progress, the selected tile is empty.
///
/// Finished games freeze the cursor wherever the last move landed, so the
/// property only applies to `Outcome::InProgress`.
pub struct CursorOnEmptyInvariant;

impl Invariant<GameState> for CursorOnEmptyInvariant {
    fn holds(state: &GameState) -> bool {
        state.outcome().is_finished() || state.board().is_empty(state.selected_tile())
    }

    fn description() -> &'static str {
        "Cursor rests on an empty tile while the game is in progress"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Player, Position};

    #[test]
    fn test_cursor_on_marker_detected() {
        let mut state = GameState::new();
        state.apply_move(Position::TopLeft);
        assert!(!CursorOnEmptyInvariant::holds(&state));
    }

    #[test]
    fn test_finished_game_exempt() {
        let mut state = GameState::new();
        state.apply_move(Position::TopLeft);
        state.outcome = Outcome::Won(Player::One);
        assert!(CursorOnEmptyInvariant::holds(&state));
    }
}

//! History consistency invariant: replaying the moves rebuilds the board.

use super::Invariant;
use crate::{Board, Cell, GameState, Player};

/// Invariant: history alternates players from One and reproduces the board.
///
/// Also rules out overwritten cells, since a replayed move onto an occupied
/// cell fails the check.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut rebuilt = Board::new();
        let mut expected = Player::One;

        for mov in state.history() {
            if mov.player != expected || !rebuilt.is_empty(mov.position) {
                return false;
            }
            rebuilt.set(mov.position, Cell::Owned(mov.player));
            expected = expected.opponent();
        }

        state.history().len() == usize::from(state.move_count()) && rebuilt == *state.board()
    }

    fn description() -> &'static str {
        "Move history alternates players and rebuilds the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_empty_history_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_same_player_twice_detected() {
        let mut state = GameState::new();
        state.apply_move(Position::TopLeft);
        state.apply_move(Position::Center);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_overwrite_detected() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        state.history.push(Move::new(Player::Two, Position::Center));
        state.move_count += 1;
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}

//! Tie detection logic.

use super::win::check_winner;
use crate::{Board, Cell};

/// Checks if every cell holds a marker.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no winning line.
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    const ONE: Cell = Cell::Owned(Player::One);
    const TWO: Cell = Cell::Owned(Player::Two);

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_tie_detection() {
        // 1 2 1 / 1 2 2 / 2 1 1
        let board = Board::from_cells([ONE, TWO, ONE, ONE, TWO, TWO, TWO, ONE, ONE]);
        assert!(is_tie(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_tie() {
        let board = Board::from_cells([ONE, ONE, ONE, TWO, TWO, ONE, TWO, ONE, TWO]);
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}

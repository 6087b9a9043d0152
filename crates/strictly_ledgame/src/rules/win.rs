//! Win detection logic.

use crate::{Board, Cell, Player, Position};
use tracing::instrument;

/// Three tiles in a row.
pub type WinLine = [Position; 3];

/// The eight winning lines, in evaluation order.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first line held entirely by one player.
///
/// All eight lines are checked before concluding there is no winner.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, WinLine)> {
    WIN_LINES.into_iter().find_map(|line @ [a, b, c]| {
        let cell = board.get(a);
        match cell {
            Cell::Owned(player) if cell == board.get(b) && cell == board.get(c) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, tiles: &[Position]) -> Board {
        let mut board = Board::new();
        for &pos in tiles {
            board.set(pos, Cell::Owned(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            for player in [Player::One, Player::Two] {
                let board = board_with(player, &line);
                assert_eq!(winning_line(&board), Some((player, line)));
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(Player::One, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Cell::Owned(Player::Two));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::Two, &[Position::Center, Position::BottomLeft]);
        assert_eq!(check_winner(&board), None);
    }
}

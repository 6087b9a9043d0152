//! Core domain types for the LED tic-tac-toe board.

use crate::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player one (goes first, red).
    #[display("Player 1")]
    One,
    /// Player two (green).
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// LED color that identifies this player.
    pub fn color(self) -> Color {
        match self {
            Player::One => Color::Red,
            Player::Two => Color::Green,
        }
    }
}

/// Colors available on each bi-color LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Color {
    /// Red drive line.
    Red,
    /// Green drive line.
    Green,
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No marker.
    #[default]
    Empty,
    /// Marker placed by a player.
    Owned(Player),
}

impl Cell {
    /// The owning player, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from a literal layout.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding a marker.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// First empty tile strictly after `from`, wrapping around the board.
    ///
    /// `from` itself is considered last, so a board whose only empty tile
    /// is `from` returns `from`. A full board returns `None`.
    pub fn next_empty_after(&self, from: Position) -> Option<Position> {
        let mut pos = from;
        for _ in 0..Position::ALL.len() {
            pos = pos.next();
            if self.is_empty(pos) {
                return Some(pos);
            }
        }
        None
    }
}

/// How the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board filled without a winner.
    Tied,
}

impl Outcome {
    /// True once the game has reached `Won` or `Tied`.
    pub fn is_finished(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Tied => write!(f, "Tie game"),
        }
    }
}

/// A placed marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who placed it.
    pub player: Player,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Complete game state.
///
/// Only [`Game`](crate::Game) mutates this; everything else sees it
/// through a shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) selected_tile: Position,
    pub(crate) move_count: u8,
    pub(crate) outcome: Outcome,
    pub(crate) cursor_flash_on: bool,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// The power-on state: empty board, player one to move, cursor on tile 0.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::One,
            selected_tile: Position::TopLeft,
            move_count: 0,
            outcome: Outcome::InProgress,
            cursor_flash_on: false,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is (frozen once the game ends).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Tile under the cursor.
    pub fn selected_tile(&self) -> Position {
        self.selected_tile
    }

    /// Number of markers placed.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the cursor LED is currently lit.
    pub fn cursor_flash_on(&self) -> bool {
        self.cursor_flash_on
    }

    /// Moves in the order they were played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's marker without validation.
    pub(crate) fn apply_move(&mut self, pos: Position) {
        let player = self.current_player;
        self.board.set(pos, Cell::Owned(player));
        self.history.push(Move::new(player, pos));
        self.move_count += 1;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

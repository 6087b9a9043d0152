//! Structured results of state machine operations.
//!
//! Operations never render or log on their own. They hand one of these
//! back and the caller decides whether to re-encode the display and what
//! to tell the status log.

use crate::rules::WinLine;
use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// What an operation did to the game.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Game returned to its initial state.
    Reset,
    /// Cursor moved (possibly onto the same tile when only one is empty).
    CursorMoved {
        /// Tile the cursor left.
        from: Position,
        /// Tile the cursor landed on.
        to: Position,
    },
    /// A marker was placed and play continues.
    MarkPlaced {
        /// Who placed it.
        player: Player,
        /// Where it went.
        tile: Position,
        /// Whose turn it is now.
        next_player: Player,
        /// Where the cursor moved to.
        cursor: Position,
    },
    /// The selected tile already holds a marker; nothing changed.
    TileOccupied {
        /// The selected tile.
        tile: Position,
        /// Who holds it.
        owner: Player,
    },
    /// The last move completed a line.
    GameWon {
        /// The winner.
        player: Player,
        /// The winning move.
        tile: Position,
        /// The completed line.
        line: WinLine,
    },
    /// The last move filled the board without a winner.
    GameTied {
        /// Who made the final move.
        player: Player,
        /// The final move.
        tile: Position,
    },
    /// The cursor LED toggled.
    FlashToggled {
        /// New flash state.
        on: bool,
    },
    /// Input arrived after the game ended and was ignored.
    GameOver,
    /// Nothing changed.
    Unchanged,
}

impl GameEvent {
    /// Whether the display must be re-encoded after this event.
    pub fn needs_render(&self) -> bool {
        match self {
            GameEvent::Reset
            | GameEvent::MarkPlaced { .. }
            | GameEvent::GameWon { .. }
            | GameEvent::GameTied { .. }
            | GameEvent::FlashToggled { .. } => true,
            GameEvent::CursorMoved { from, to } => from != to,
            GameEvent::TileOccupied { .. } | GameEvent::GameOver | GameEvent::Unchanged => false,
        }
    }
}

//! Display encoding for the bi-color LED matrix.
//!
//! [`encode`] maps a [`GameState`] to the logical drive lines of the nine
//! LEDs. How those lines are packed into shift registers is the transport's
//! concern.

use crate::{Cell, Color, GameState, Outcome, Position};
use serde::{Deserialize, Serialize};

/// Red and green drive lines for one LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DrivePair {
    /// Red line asserted.
    pub red: bool,
    /// Green line asserted.
    pub green: bool,
}

impl DrivePair {
    /// Both lines off.
    pub const OFF: DrivePair = DrivePair {
        red: false,
        green: false,
    };

    /// Drive a single color.
    pub const fn lit(color: Color) -> Self {
        match color {
            Color::Red => DrivePair {
                red: true,
                green: false,
            },
            Color::Green => DrivePair {
                red: false,
                green: true,
            },
        }
    }

    /// The color shown, if exactly one line is asserted.
    pub fn color(self) -> Option<Color> {
        match (self.red, self.green) {
            (true, false) => Some(Color::Red),
            (false, true) => Some(Color::Green),
            _ => None,
        }
    }

    /// Whether either line is asserted.
    pub fn is_lit(self) -> bool {
        self.red || self.green
    }
}

impl From<Cell> for DrivePair {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => DrivePair::OFF,
            Cell::Owned(player) => DrivePair::lit(player.color()),
        }
    }
}

/// Drive lines for the whole matrix, one pair per tile in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Frame {
    pairs: [DrivePair; 9],
}

impl Frame {
    /// All LEDs off.
    pub const BLANK: Frame = Frame {
        pairs: [DrivePair::OFF; 9],
    };

    /// Builds a frame from explicit pairs.
    pub fn from_pairs(pairs: [DrivePair; 9]) -> Self {
        Self { pairs }
    }

    /// Every LED showing `color`.
    pub fn solid(color: Color) -> Self {
        Self {
            pairs: [DrivePair::lit(color); 9],
        }
    }

    /// Drive lines for one tile.
    pub fn get(&self, pos: Position) -> DrivePair {
        self.pairs[pos.to_index()]
    }

    /// All pairs in tile order.
    pub fn pairs(&self) -> &[DrivePair; 9] {
        &self.pairs
    }

    /// Number of lit LEDs.
    pub fn lit_count(&self) -> usize {
        self.pairs.iter().filter(|p| p.is_lit()).count()
    }
}

/// Encodes the game state into LED drive lines.
///
/// A win lights the whole matrix in the winner's color. A tie shows the
/// markers as they lie. While in progress the markers are shown and, when the
/// flash is on, the empty cursor tile shows the current player's color.
pub fn encode(state: &GameState) -> Frame {
    match state.outcome() {
        Outcome::Won(winner) => Frame::solid(winner.color()),
        Outcome::Tied => markers(state),
        Outcome::InProgress => {
            let mut frame = markers(state);
            let cursor = state.selected_tile();
            if state.cursor_flash_on() && state.board().is_empty(cursor) {
                frame.pairs[cursor.to_index()] = DrivePair::lit(state.current_player().color());
            }
            frame
        }
    }
}

fn markers(state: &GameState) -> Frame {
    let cells: [Cell; 9] = *state.board().cells();
    Frame {
        pairs: cells.map(DrivePair::from),
    }
}

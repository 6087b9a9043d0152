//! Tile positions on the 3x3 LED matrix.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A tile on the board (0-8, row-major).
///
/// The index is what the cursor and the display driver work with; the
/// named variants exist so tests and log lines read naturally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (tile 0)
    TopLeft,
    /// Top-center (tile 1)
    TopCenter,
    /// Top-right (tile 2)
    TopRight,
    /// Middle-left (tile 3)
    MiddleLeft,
    /// Center (tile 4)
    Center,
    /// Middle-right (tile 5)
    MiddleRight,
    /// Bottom-left (tile 6)
    BottomLeft,
    /// Bottom-center (tile 7)
    BottomCenter,
    /// Bottom-right (tile 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub const fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The next tile in row-major order, wrapping from 8 back to 0.
    pub fn next(self) -> Self {
        Self::ALL[(self.to_index() + 1) % Self::ALL.len()]
    }

    /// Row of this tile (0-2).
    pub const fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this tile (0-2).
    pub const fn col(self) -> usize {
        self.to_index() % 3
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<usize> for Position {
    type Error = TileIndexError;

    #[track_caller]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match Self::from_index(index) {
            Some(pos) => Ok(pos),
            None => Err(TileIndexError::new(index)),
        }
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.to_index()
    }
}

/// A tile index outside 0-8.
#[derive(Debug, Clone, Display, Error)]
#[display("Tile index {} out of range (0-8) at {}:{}", index, file, line)]
pub struct TileIndexError {
    /// The rejected index.
    pub index: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TileIndexError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(index: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            index,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

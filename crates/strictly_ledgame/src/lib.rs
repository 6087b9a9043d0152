//! Tic-tac-toe for a 3x3 bi-color LED matrix.
//!
//! # Architecture
//!
//! - **Game**: state machine driven by four buttons and a flash timer
//! - **Rules**: pure win and tie detection over a [`Board`]
//! - **Display**: [`encode`] turns a [`GameState`] into LED drive lines
//! - **Invariants**: properties checked after every mutation in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_ledgame::{Game, Outcome, Player, encode};
//!
//! let mut game = Game::new();
//! for _ in 0..2 {
//!     let event = game.select_current_tile();
//!     assert!(event.needs_render());
//! }
//! assert_eq!(game.state().current_player(), Player::One);
//! assert_eq!(game.state().outcome(), Outcome::InProgress);
//! assert_eq!(encode(game.state()).lit_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod display;
mod event;
mod flash;
mod game;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use display::{DrivePair, Frame, encode};
pub use event::GameEvent;
pub use flash::{DEFAULT_FLASH_INTERVAL, FlashTimer, GameConfig};
pub use game::Game;
pub use invariants::{
    CursorOnEmptyInvariant, GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MoveCountInvariant,
};
pub use position::{Position, TileIndexError};
pub use rules::{WIN_LINES, WinLine};
pub use types::{Board, Cell, Color, GameState, Move, Outcome, Player};

//! The game state machine.

use crate::flash::{FlashTimer, GameConfig};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules::{is_full, winning_line};
use crate::{Cell, GameEvent, GameState, Outcome};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine driven by button presses and timer ticks.
///
/// Every operation is total: input that makes no sense in the current
/// state is absorbed and reported through the returned [`GameEvent`].
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    flash: FlashTimer,
}

impl Game {
    /// Creates a game with the default flash interval.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates a game with custom timing.
    #[instrument]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            state: GameState::new(),
            flash: FlashTimer::new(config.flash_interval),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the game to its initial state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameEvent {
        self.state = GameState::new();
        self.flash.clear();
        info!("Game reset");
        GameEvent::Reset
    }

    /// Moves the cursor to the next empty tile.
    #[instrument(skip(self), fields(from = ?self.state.selected_tile))]
    pub fn advance_cursor(&mut self) -> GameEvent {
        if self.state.outcome.is_finished() {
            debug!("Cursor input ignored, game over");
            return GameEvent::GameOver;
        }

        let from = self.state.selected_tile;
        let to = self.state.board.next_empty_after(from).unwrap_or(from);
        self.state.selected_tile = to;
        debug!(?to, "Cursor advanced");
        self.verify();
        GameEvent::CursorMoved { from, to }
    }

    /// Places the current player's marker under the cursor.
    #[instrument(skip(self), fields(
        player = %self.state.current_player,
        tile = ?self.state.selected_tile,
    ))]
    pub fn select_current_tile(&mut self) -> GameEvent {
        if self.state.outcome.is_finished() {
            debug!("Select ignored, game over");
            return GameEvent::GameOver;
        }

        let tile = self.state.selected_tile;
        if let Cell::Owned(owner) = self.state.board.get(tile) {
            debug!(%owner, "Tile already occupied");
            return GameEvent::TileOccupied { tile, owner };
        }

        let player = self.state.current_player;
        self.state.apply_move(tile);

        let event = if let Some((winner, line)) = winning_line(&self.state.board) {
            self.state.outcome = Outcome::Won(winner);
            info!(%winner, ?line, "Game won");
            GameEvent::GameWon {
                player: winner,
                tile,
                line,
            }
        } else if is_full(&self.state.board) {
            self.state.outcome = Outcome::Tied;
            info!("Game tied");
            GameEvent::GameTied { player, tile }
        } else {
            let next_player = player.opponent();
            let cursor = self.state.board.next_empty_after(tile).unwrap_or(tile);
            self.state.current_player = next_player;
            self.state.selected_tile = cursor;
            info!(%next_player, ?cursor, "Mark placed");
            GameEvent::MarkPlaced {
                player,
                tile,
                next_player,
                cursor,
            }
        };

        self.verify();
        event
    }

    /// Feeds elapsed time to the cursor flash.
    ///
    /// `elapsed` is the time since the previous tick, not an absolute clock
    /// reading.
    #[instrument(skip(self), level = "trace")]
    pub fn tick_flash(&mut self, elapsed: u64) -> GameEvent {
        if self.state.outcome.is_finished() || !self.flash.tick(elapsed) {
            return GameEvent::Unchanged;
        }

        self.state.cursor_flash_on = !self.state.cursor_flash_on;
        GameEvent::FlashToggled {
            on: self.state.cursor_flash_on,
        }
    }

    /// Checks the invariant set in debug builds.
    fn verify(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = GameInvariants::check_all(&self.state)
        {
            for violation in &violations {
                warn!(%violation, "Game state inconsistent");
            }
            debug_assert!(violations.is_empty(), "{:?}", violations);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

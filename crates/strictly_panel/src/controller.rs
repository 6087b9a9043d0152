//! The poll-loop controller.
//!
//! Owns the game and the display transport. Each poll feeds the elapsed
//! time to the cursor flash, applies the button presses seen since the last
//! poll, and re-sends the display at most once.

use crate::status::log_event;
use crate::{Button, Transport, TransportError};
use strictly_ledgame::{Game, GameConfig, GameEvent, GameState, encode};
use tracing::{debug, info, instrument};

/// What one poll did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollReport {
    /// Game events in the order they happened.
    pub events: Vec<GameEvent>,
    /// Whether a frame was sent to the display.
    pub rendered: bool,
}

/// Drives a [`Game`] from button presses and clock readings.
#[derive(Debug)]
pub struct Controller<T> {
    game: Game,
    transport: T,
    powered: bool,
    last_poll: Option<u64>,
}

impl<T: Transport> Controller<T> {
    /// Creates a powered-on controller; call [`start`](Self::start) to light the display.
    #[instrument(skip(transport))]
    pub fn new(config: GameConfig, transport: T) -> Self {
        Self {
            game: Game::with_config(config),
            transport,
            powered: true,
            last_poll: None,
        }
    }

    /// Sends the initial frame.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), TransportError> {
        info!("Panel started");
        self.render()
    }

    /// Handles one iteration of the poll loop.
    ///
    /// `now` is a monotonic clock reading. A reading earlier than the
    /// previous one counts as no elapsed time.
    #[instrument(skip(self, presses), level = "trace")]
    pub fn poll(&mut self, now: u64, presses: &[Button]) -> Result<PollReport, TransportError> {
        let elapsed = self
            .last_poll
            .map_or(0, |previous| now.saturating_sub(previous));
        self.last_poll = Some(now);

        let mut report = PollReport::default();
        let mut dirty = false;

        if self.powered {
            let event = self.game.tick_flash(elapsed);
            dirty |= event.needs_render();
            if event != GameEvent::Unchanged {
                report.events.push(event);
            }
        }

        for &button in presses {
            if button == Button::Power {
                dirty = true;
                if let Some(event) = self.toggle_power() {
                    report.events.push(event);
                }
                continue;
            }
            if !self.powered {
                debug!(%button, "Ignored while powered off");
                continue;
            }

            let event = match button {
                Button::Reset => self.game.reset(),
                Button::Advance => self.game.advance_cursor(),
                Button::Select => self.game.select_current_tile(),
                Button::Power => continue,
            };
            log_event(&event, self.game.state());
            dirty |= event.needs_render();
            report.events.push(event);
        }

        if dirty {
            self.render()?;
            report.rendered = true;
        }
        Ok(report)
    }

    /// Flips power; powering on starts a fresh game.
    fn toggle_power(&mut self) -> Option<GameEvent> {
        self.powered = !self.powered;
        info!(powered = self.powered, "Power toggled");
        if self.powered {
            let event = self.game.reset();
            log_event(&event, self.game.state());
            Some(event)
        } else {
            None
        }
    }

    fn render(&mut self) -> Result<(), TransportError> {
        if self.powered {
            self.transport.send(&encode(self.game.state()))
        } else {
            self.transport.blank()
        }
    }

    /// Snapshot of the game.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Whether the panel is on.
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// The display transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

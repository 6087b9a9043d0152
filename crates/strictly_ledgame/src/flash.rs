//! Non-blocking cursor flash timer.

use serde::{Deserialize, Serialize};

/// Default flash half-period in clock units.
pub const DEFAULT_FLASH_INTERVAL: u64 = 500;

/// Tuning for the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Time between cursor flash toggles.
    #[serde(default = "default_flash_interval")]
    pub flash_interval: u64,
}

fn default_flash_interval() -> u64 {
    DEFAULT_FLASH_INTERVAL
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            flash_interval: DEFAULT_FLASH_INTERVAL,
        }
    }
}

/// Accumulates elapsed time since the last toggle.
///
/// Elapsed time beyond the interval is dropped when the timer fires, so a
/// late poll delays the following toggle instead of bunching them up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashTimer {
    interval: u64,
    since_toggle: u64,
}

impl FlashTimer {
    /// Creates a timer that fires every `interval` units.
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            since_toggle: 0,
        }
    }

    /// Adds `elapsed` and reports whether the interval has been reached.
    pub fn tick(&mut self, elapsed: u64) -> bool {
        self.since_toggle = self.since_toggle.saturating_add(elapsed);
        if self.since_toggle >= self.interval {
            self.since_toggle = 0;
            true
        } else {
            false
        }
    }

    /// Forgets accumulated time.
    pub fn clear(&mut self) {
        self.since_toggle = 0;
    }
}

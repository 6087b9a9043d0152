//! Headless replay of timed button presses.
//!
//! A script lists presses with the time they start and how long the switch
//! stays closed. Replay samples the switch levels every poll interval,
//! runs them through the debouncers and drives a controller over the
//! simulated register chain, exactly as the interactive panel would.
//!
//! ```toml
//! [[press]]
//! at = 0
//! button = "select"
//!
//! [[press]]
//! at = 200
//! button = "advance"
//! bounce = true
//! ```

use crate::{
    Button, ButtonBank, Controller, Levels, PanelConfig, PanelError, ScriptError,
    ShiftRegisterChain, SimulatedTransport,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Contact chatter at the start of a bouncy press, in clock units.
const BOUNCE_SPAN: u64 = 6;

/// One button press in a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Press {
    /// When the switch closes.
    pub at: u64,
    /// Which switch.
    pub button: Button,
    /// How long it stays closed.
    #[serde(default = "default_hold")]
    #[new(value = "default_hold()")]
    pub hold: u64,
    /// Whether the contacts chatter when closing.
    #[serde(default)]
    #[new(default)]
    pub bounce: bool,
}

fn default_hold() -> u64 {
    60
}

impl Press {
    fn level_at(&self, now: u64) -> bool {
        if now < self.at || now >= self.end() {
            return false;
        }
        let since = now - self.at;
        if self.bounce && since < BOUNCE_SPAN {
            return (since / 2) % 2 == 0;
        }
        true
    }

    fn end(&self) -> u64 {
        self.at.saturating_add(self.hold)
    }
}

/// Shortest hold that always yields an edge when levels are sampled every
/// `poll_interval` from time zero.
///
/// The first clean sample can land up to one interval after the chatter
/// ends, and the debouncer only settles on a later sample at least
/// `debounce` after that one.
fn min_hold(debounce: u64, poll_interval: u64) -> u64 {
    let step = poll_interval.max(1);
    debounce
        .div_ceil(step)
        .saturating_mul(step)
        .saturating_add(BOUNCE_SPAN)
        .saturating_add(step)
}

/// A timed sequence of presses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Presses in any order.
    #[serde(default, rename = "press")]
    pub presses: Vec<Press>,
}

impl Script {
    /// Builds a script from presses.
    pub fn new(presses: Vec<Press>) -> Self {
        Self { presses }
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ScriptError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))?;
        debug!(presses = script.presses.len(), "Script parsed");
        Ok(script)
    }

    /// Raw switch levels at `now`.
    pub fn levels_at(&self, now: u64) -> Levels {
        let mut levels = Levels::default();
        for press in &self.presses {
            if press.level_at(now) {
                levels.set(press.button, true);
            }
        }
        levels
    }

    /// Time the last switch opens.
    pub fn end(&self) -> u64 {
        self.presses.iter().map(Press::end).max().unwrap_or(0)
    }

    /// Checks that every press is held long enough to be seen by a
    /// debouncer sampled every `poll_interval`.
    pub fn validate(&self, debounce: u64, poll_interval: u64) -> Result<(), ScriptError> {
        let needed = min_hold(debounce, poll_interval);
        for press in &self.presses {
            if press.hold < needed {
                return Err(ScriptError::new(format!(
                    "{} press at {} held {} but needs at least {}",
                    press.button, press.at, press.hold, needed
                )));
            }
        }
        Ok(())
    }
}

/// Plays `script` against a fresh controller and returns it for inspection.
#[instrument(skip(script), fields(presses = script.presses.len()))]
pub fn replay(
    script: &Script,
    config: &PanelConfig,
) -> Result<Controller<SimulatedTransport>, PanelError> {
    script.validate(*config.debounce(), *config.poll_interval())?;

    let chain = ShiftRegisterChain::new(*config.registers())?;
    let mut controller = Controller::new(config.game_config(), SimulatedTransport::simulated(chain));
    controller.start()?;

    let mut bank = ButtonBank::new(*config.debounce());
    let step = *config.poll_interval();
    // Run past the last release so trailing edges settle.
    let end = script
        .end()
        .saturating_add(config.debounce().saturating_mul(2))
        .saturating_add(step);

    let mut now: u64 = 0;
    loop {
        let presses = bank.sample(script.levels_at(now), now);
        controller.poll(now, &presses)?;
        match now.checked_add(step) {
            Some(next) if next <= end => now = next,
            _ => break,
        }
    }

    info!(outcome = %controller.state().outcome(), "Replay finished");
    Ok(controller)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = Script::from_toml(
            r#"
            [[press]]
            at = 10
            button = "select"

            [[press]]
            at = 100
            button = "advance"
            hold = 80
            bounce = true
            "#,
        )
        .unwrap();
        assert_eq!(script.presses.len(), 2);
        assert_eq!(script.presses[0], Press::new(10, Button::Select));
        assert_eq!(script.end(), 180);
    }

    #[test]
    fn test_unknown_button_rejected() {
        let err = Script::from_toml("[[press]]\nat = 0\nbutton = \"eject\"\n").unwrap_err();
        assert!(err.message.contains("parse"));
    }

    #[test]
    fn test_bouncy_level() {
        let press = Press {
            at: 0,
            button: Button::Select,
            hold: 50,
            bounce: true,
        };
        let levels: Vec<bool> = (0..8).map(|t| press.level_at(t)).collect();
        assert_eq!(levels, vec![true, true, false, false, true, true, true, true]);
        assert!(!press.level_at(50));
    }

    #[test]
    fn test_short_hold_rejected() {
        let script = Script::new(vec![Press {
            at: 0,
            button: Button::Reset,
            hold: 10,
            bounce: false,
        }]);
        assert!(script.validate(20, 10).is_err());
    }

    #[test]
    fn test_min_hold_covers_sampling_gap() {
        assert_eq!(min_hold(20, 10), 36);
        // Window rounds up to whole poll intervals.
        assert_eq!(min_hold(5, 10), 26);
        assert_eq!(min_hold(20, 1), 27);

        let script = Script::new(vec![Press {
            at: 1,
            button: Button::Select,
            hold: 27,
            bounce: false,
        }]);
        assert!(script.validate(20, 10).is_err());
        assert!(script.validate(20, 1).is_ok());
    }

    #[test]
    fn test_huge_times_saturate() {
        let press = Press {
            at: u64::MAX - 5,
            button: Button::Advance,
            hold: 100,
            bounce: false,
        };
        assert_eq!(press.end(), u64::MAX);
        assert!(press.level_at(u64::MAX - 1));
        assert_eq!(Script::new(vec![press]).end(), u64::MAX);
        assert_eq!(min_hold(u64::MAX, 10), u64::MAX);
    }
}

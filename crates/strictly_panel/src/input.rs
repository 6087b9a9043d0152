//! Switch input: the four buttons and their debouncers.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// A momentary switch on the panel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Turns the panel on and off.
    Power,
    /// Starts a new game.
    Reset,
    /// Moves the cursor to the next free tile.
    Advance,
    /// Places a marker under the cursor.
    Select,
}

/// Turns raw switch levels into press edges.
///
/// A level only counts once it has held for `window` time units. A press
/// edge is reported when the stable level goes from released to pressed;
/// contact bounce inside the window never reaches the stable level.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: u64,
    stable: bool,
    candidate: bool,
    candidate_since: u64,
}

impl Debouncer {
    /// Creates a debouncer for a released switch.
    pub fn new(window: u64) -> Self {
        Self {
            window,
            stable: false,
            candidate: false,
            candidate_since: 0,
        }
    }

    /// Feeds a level sample taken at `now`; returns true on a press edge.
    pub fn sample(&mut self, level: bool, now: u64) -> bool {
        if level != self.candidate {
            self.candidate = level;
            self.candidate_since = now;
        }

        let settled = now.saturating_sub(self.candidate_since) >= self.window;
        if settled && self.candidate != self.stable {
            self.stable = self.candidate;
            return self.stable;
        }
        false
    }

    /// The debounced level.
    pub fn is_pressed(&self) -> bool {
        self.stable
    }
}

/// Raw levels for all four switches at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levels {
    /// Power switch closed.
    pub power: bool,
    /// Reset switch closed.
    pub reset: bool,
    /// Advance switch closed.
    pub advance: bool,
    /// Select switch closed.
    pub select: bool,
}

impl Levels {
    /// Level of one switch.
    pub fn get(&self, button: Button) -> bool {
        match button {
            Button::Power => self.power,
            Button::Reset => self.reset,
            Button::Advance => self.advance,
            Button::Select => self.select,
        }
    }

    /// Sets the level of one switch.
    pub fn set(&mut self, button: Button, level: bool) {
        match button {
            Button::Power => self.power = level,
            Button::Reset => self.reset = level,
            Button::Advance => self.advance = level,
            Button::Select => self.select = level,
        }
    }
}

/// One debouncer per button.
#[derive(Debug, Clone)]
pub struct ButtonBank {
    power: Debouncer,
    reset: Debouncer,
    advance: Debouncer,
    select: Debouncer,
}

impl ButtonBank {
    /// Creates a bank with the same window on every switch.
    #[instrument]
    pub fn new(window: u64) -> Self {
        Self {
            power: Debouncer::new(window),
            reset: Debouncer::new(window),
            advance: Debouncer::new(window),
            select: Debouncer::new(window),
        }
    }

    fn debouncer(&mut self, button: Button) -> &mut Debouncer {
        match button {
            Button::Power => &mut self.power,
            Button::Reset => &mut self.reset,
            Button::Advance => &mut self.advance,
            Button::Select => &mut self.select,
        }
    }

    /// Samples every switch and returns the buttons pressed on this poll.
    pub fn sample(&mut self, levels: Levels, now: u64) -> Vec<Button> {
        let pressed: Vec<Button> = Button::iter()
            .filter(|&button| self.debouncer(button).sample(levels.get(button), now))
            .collect();
        if !pressed.is_empty() {
            trace!(?pressed, now, "Press edges");
        }
        pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_press_yields_one_edge() {
        let mut d = Debouncer::new(20);
        assert!(!d.sample(true, 0));
        assert!(!d.sample(true, 10));
        assert!(d.sample(true, 20));
        assert!(!d.sample(true, 30));
        assert!(d.is_pressed());
    }

    #[test]
    fn test_bounce_yields_one_edge() {
        let mut d = Debouncer::new(20);
        let samples = [
            (true, 0),
            (false, 2),
            (true, 4),
            (false, 5),
            (true, 7),
            (true, 15),
            (true, 27),
            (true, 40),
            (false, 50),
            (true, 52),
            (false, 54),
            (false, 80),
        ];
        let edges = samples
            .iter()
            .filter(|&&(level, now)| d.sample(level, now))
            .count();
        assert_eq!(edges, 1);
        assert!(!d.is_pressed());
    }

    #[test]
    fn test_short_glitch_ignored() {
        let mut d = Debouncer::new(20);
        assert!(!d.sample(true, 0));
        assert!(!d.sample(false, 5));
        assert!(!d.sample(false, 40));
        assert!(!d.is_pressed());
    }

    #[test]
    fn test_bank_reports_each_button() {
        let mut bank = ButtonBank::new(0);
        let levels = Levels {
            advance: true,
            select: true,
            ..Levels::default()
        };
        assert_eq!(bank.sample(levels, 0), vec![Button::Advance, Button::Select]);
        assert!(bank.sample(levels, 1).is_empty());
    }
}

//! Panel configuration.

use crate::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_ledgame::{DEFAULT_FLASH_INTERVAL, GameConfig};
use tracing::{debug, info, instrument};

/// Longest daisy chain the panel will drive.
const MAX_REGISTERS: usize = 64;

/// Settings for the controller and its collaborators.
///
/// All times are in milliseconds of the monotonic panel clock.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Time between cursor flash toggles.
    #[serde(default = "default_flash_interval")]
    flash_interval: u64,

    /// Sleep between poll iterations.
    #[serde(default = "default_poll_interval")]
    poll_interval: u64,

    /// How long a switch level must be stable to count.
    #[serde(default = "default_debounce")]
    debounce: u64,

    /// Shift registers in the daisy chain.
    #[serde(default = "default_registers")]
    registers: usize,
}

#[instrument]
fn default_flash_interval() -> u64 {
    DEFAULT_FLASH_INTERVAL
}

#[instrument]
fn default_poll_interval() -> u64 {
    10
}

#[instrument]
fn default_debounce() -> u64 {
    20
}

#[instrument]
fn default_registers() -> usize {
    3
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            flash_interval: default_flash_interval(),
            poll_interval: default_poll_interval(),
            debounce: default_debounce(),
            registers: default_registers(),
        }
    }
}

impl PanelConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from `path` when given, otherwise uses defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Game engine settings derived from this config.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            flash_interval: self.flash_interval,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.flash_interval == 0 {
            return Err(ConfigError::new("flash_interval must be greater than zero"));
        }
        if self.poll_interval == 0 {
            return Err(ConfigError::new("poll_interval must be greater than zero"));
        }
        if !(3..=MAX_REGISTERS).contains(&self.registers) {
            return Err(ConfigError::new(format!(
                "registers must be between 3 and {}, got {}",
                MAX_REGISTERS, self.registers
            )));
        }
        Ok(())
    }
}

//! Configuration schema for ytz shells.
//!
//! One YAML file covers the rules knobs, the highscore store, and event logs.
//! Every field has a default, so an empty document is a valid config.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Upper bound accepted for `highscores.capacity`.
pub const MAX_HIGHSCORE_CAPACITY: usize = 1000;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Rules settings.
    #[serde(default)]
    pub game: GameConfig,
    /// Highscore store settings.
    #[serde(default)]
    pub highscores: HighscoreConfig,
    /// NDJSON event log settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameConfig {
    /// Rerolls allowed per turn after the opening roll.
    #[serde(default = "default_rerolls_allowed")]
    pub rerolls_allowed: u8,
}

fn default_rerolls_allowed() -> u8 {
    crate::session::DEFAULT_REROLLS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rerolls_allowed: default_rerolls_allowed(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HighscoreConfig {
    /// Path of the `name-score` store; created on first save.
    #[serde(default = "default_highscore_path")]
    pub path: String,
    /// Number of entries kept on the board.
    #[serde(default = "default_highscore_capacity")]
    pub capacity: usize,
}

fn default_highscore_path() -> String {
    "highscores.dat".to_string()
}

fn default_highscore_capacity() -> usize {
    8
}

impl Default for HighscoreConfig {
    fn default() -> Self {
        Self {
            path: default_highscore_path(),
            capacity: default_highscore_capacity(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// If set, append NDJSON game events to this file.
    #[serde(default)]
    pub events_path: Option<String>,
    /// Flush the event log every N lines (0 = only on close).
    #[serde(default)]
    pub flush_every_lines: u64,
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the shells cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.highscores.capacity > MAX_HIGHSCORE_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "highscores.capacity must be at most {MAX_HIGHSCORE_CAPACITY}, got {}",
                self.highscores.capacity
            )));
        }
        Ok(())
    }
}

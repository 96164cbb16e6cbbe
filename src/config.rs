//! Game configuration loaded from TOML.

use crate::games::tictactoe::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opponent thinking time in milliseconds.
    #[serde(default = "default_opponent_delay_ms")]
    opponent_delay_ms: u64,

    /// Multiplier applied to the delay before the opponent's first move.
    #[serde(default = "default_first_move_delay_factor")]
    first_move_delay_factor: u32,

    /// Seed for the opponent's random choices. Absent means entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// Mark the human plays.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,
}

fn default_opponent_delay_ms() -> u64 {
    500
}

fn default_first_move_delay_factor() -> u32 {
    2
}

fn default_human_mark() -> Mark {
    Mark::X
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opponent_delay_ms: default_opponent_delay_ms(),
            first_move_delay_factor: default_first_move_delay_factor(),
            seed: None,
            human_mark: default_human_mark(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(delay_ms = config.opponent_delay_ms, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.first_move_delay_factor == 0 {
            return Err(ConfigError::new(
                "first_move_delay_factor must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the opponent delay.
    pub fn with_opponent_delay_ms(mut self, ms: u64) -> Self {
        self.opponent_delay_ms = ms;
        self
    }

    /// Overrides the human's mark.
    pub fn with_human_mark(mut self, mark: Mark) -> Self {
        self.human_mark = mark;
        self
    }

    /// Delay before each opponent move.
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    /// Delay before the opponent's first move of a session.
    pub fn first_move_delay(&self) -> Duration {
        self.opponent_delay() * self.first_move_delay_factor
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

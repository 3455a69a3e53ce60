//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use morpion_engine::{DEFAULT_BOARD_SIZE, EngineError, Game, Player, default_players};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a morpion session.
///
/// ```toml
/// board_size = 3
///
/// [[players]]
/// label = "X"
/// color = "blue"
///
/// [[players]]
/// label = "O"
/// color = "green"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct MorpionConfig {
    /// Board dimension (cells per side).
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Player rotation, first entry moves first.
    #[serde(default = "default_players")]
    players: Vec<Player>,
}

#[instrument]
fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

impl Default for MorpionConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            players: default_players(),
        }
    }
}

impl MorpionConfig {
    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            board_size = config.board_size,
            players = config.players.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Builds a game engine from this configuration.
    #[instrument(skip(self))]
    pub fn build_game(&self) -> Result<Game, EngineError> {
        Game::new(self.players.clone(), self.board_size)
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Engine configuration.

use crate::games::tictactoe::{Difficulty, MEDIUM_DEPTH};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Difficulty the command line uses when none is given.
    #[serde(default)]
    default_difficulty: Difficulty,

    /// Depth limit for the medium tier, in plies.
    #[serde(default = "default_medium_depth")]
    medium_depth: usize,

    /// Seed for the random source. Entropy-seeded when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_medium_depth() -> usize {
    MEDIUM_DEPTH
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_difficulty: Difficulty::default(),
            medium_depth: default_medium_depth(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Returns this config with a fixed random seed.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Checks settings that deserialization alone cannot rule out.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.medium_depth == 0 {
            return Err(ConfigError::new("medium_depth must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        info!(
            default_difficulty = %config.default_difficulty,
            medium_depth = config.medium_depth,
            seeded = config.seed.is_some(),
            "Config loaded successfully"
        );
        Ok(config)
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

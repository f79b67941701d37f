//! Replay driver configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a replay run, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Abort on the first rejected step instead of skipping it.
    #[serde(default)]
    strict: bool,

    /// Print the board under the cursor after the run.
    #[serde(default = "default_show_board")]
    show_board: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default)]
    log_filter: Option<String>,
}

fn default_show_board() -> bool {
    true
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            strict: false,
            show_board: default_show_board(),
            log_filter: None,
        }
    }
}

impl ReplayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(strict = config.strict, "Config loaded successfully");
        Ok(config)
    }

    /// Returns a copy with `strict` forced on when `force` is set.
    pub fn with_strict(mut self, force: bool) -> Self {
        self.strict |= force;
        self
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

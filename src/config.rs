//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for the word source, dictionary and console behaviour.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct HangmanConfig {
    /// Datamuse-compatible word endpoint.
    words_url: String,

    /// Maximum words requested per topic.
    max_words: u32,

    /// Dictionary endpoint; the word is appended as a path segment.
    dictionary_url: String,

    /// Timeout for each HTTP request, in seconds.
    request_timeout_secs: u64,

    /// Clear the terminal before redrawing the board.
    clear_screen: bool,

    /// Wait for a key press between turns.
    pause_between_turns: bool,

    /// Seed for word selection; random when unset.
    seed: Option<u64>,
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            words_url: default_words_url(),
            max_words: 100,
            dictionary_url: default_dictionary_url(),
            request_timeout_secs: 10,
            clear_screen: true,
            pause_between_turns: true,
            seed: None,
        }
    }
}

#[instrument]
fn default_words_url() -> String {
    "https://api.datamuse.com/words".to_string()
}

#[instrument]
fn default_dictionary_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

impl HangmanConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(words_url = %config.words_url, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Configuration error.
///
/// Covers bad config files, invalid round or player counts, and word pools
/// too small for the requested match.
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

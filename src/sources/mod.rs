//! External collaborators: topic word lists and word definitions.
//!
//! The game only depends on the [`WordSource`] and [`DefinitionLookup`]
//! traits. The HTTP clients here are the production implementations.

mod datamuse;
mod dictionary;

pub use datamuse::{DatamuseClient, usable_words};
pub use dictionary::{DictionaryClient, definition_from_json};

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Supplies candidate secret words for a topic.
#[async_trait::async_trait]
pub trait WordSource: Send + Sync {
    /// Fetches single-word candidates for `topic`.
    ///
    /// Multi-token entries are never returned. An empty list means the topic
    /// has no usable words.
    async fn get_words(&self, topic: &str) -> Result<Vec<String>, SourceError>;
}

/// Supplies a human-readable definition for a word.
#[async_trait::async_trait]
pub trait DefinitionLookup: Send + Sync {
    /// Looks up the meanings of `word`.
    async fn meaning(&self, word: &str) -> Result<Definition, SourceError>;
}

/// Meanings of a word grouped by part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// The word that was looked up.
    pub word: String,
    /// Meanings in the order the dictionary lists them.
    pub meanings: Vec<Meaning>,
}

/// Definitions for one part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    /// Part of speech, e.g. "noun".
    pub part_of_speech: String,
    /// Definition texts.
    pub definitions: Vec<String>,
}

impl std::fmt::Display for Definition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for meaning in &self.meanings {
            writeln!(f, "{}", meaning.part_of_speech)?;
            for (i, text) in meaning.definitions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, text)?;
            }
        }
        Ok(())
    }
}

/// Word source or dictionary failure.
///
/// Never fatal: callers fall back to another topic or to a
/// "definition unavailable" notice.
#[derive(Debug, Clone, Display, Error)]
#[display("Source error: {} at {}:{}", message, file, line)]
pub struct SourceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SourceError {
    /// Creates a new source error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        debug!(error_message = %message, "Source error created");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Builds the shared HTTP client with a request timeout.
#[track_caller]
fn http_client(timeout: std::time::Duration) -> Result<reqwest::Client, SourceError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| SourceError::new(format!("Failed to build HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_recoverable_source_error_is_silent_at_error_level() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::ERROR)
            .with_writer(move || writer.clone())
            .finish();

        let err = tracing::subscriber::with_default(subscriber, || SourceError::new("404"));
        assert_eq!(err.message, "404");
        assert!(captured.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_definition_display_numbers_each_part_of_speech() {
        let definition = Definition {
            word: "drum".to_string(),
            meanings: vec![
                Meaning {
                    part_of_speech: "noun".to_string(),
                    definitions: vec!["A percussion instrument.".into(), "A barrel.".into()],
                },
                Meaning {
                    part_of_speech: "verb".to_string(),
                    definitions: vec!["To beat a drum.".into()],
                },
            ],
        };

        assert_eq!(
            definition.to_string(),
            "noun\n  1. A percussion instrument.\n  2. A barrel.\nverb\n  1. To beat a drum.\n"
        );
    }
}

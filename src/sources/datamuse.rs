//! Topic word lists from the Datamuse API.

use super::{SourceError, WordSource, http_client};
use crate::config::HangmanConfig;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// One entry of a Datamuse `/words` response.
#[derive(Debug, Deserialize)]
struct DatamuseEntry {
    word: String,
}

/// Keeps entries usable as secret words, lowercased.
///
/// Drops multi-token entries ("hip hop") and anything that is not purely
/// ASCII letters ("rock-n-roll", "mp3").
pub fn usable_words<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|w| w.as_ref().trim().to_ascii_lowercase())
        .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphabetic()))
        .collect()
}

/// HTTP client for `GET {base_url}?topics={topic}&max={max_words}`.
#[derive(Debug, Clone)]
pub struct DatamuseClient {
    client: reqwest::Client,
    base_url: String,
    max_words: u32,
}

impl DatamuseClient {
    /// Creates a client for the given endpoint.
    #[instrument]
    pub fn new(base_url: String, max_words: u32, timeout: Duration) -> Result<Self, SourceError> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url,
            max_words,
        })
    }

    /// Creates a client from the game configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &HangmanConfig) -> Result<Self, SourceError> {
        Self::new(
            config.words_url().clone(),
            *config.max_words(),
            config.request_timeout(),
        )
    }
}

#[async_trait::async_trait]
impl WordSource for DatamuseClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn get_words(&self, topic: &str) -> Result<Vec<String>, SourceError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(SourceError::new("Topic is empty"));
        }

        let max = self.max_words.to_string();
        let url = reqwest::Url::parse_with_params(
            &self.base_url,
            &[("topics", topic), ("max", max.as_str())],
        )
        .map_err(|e| SourceError::new(format!("Invalid word source URL: {}", e)))?;

        debug!(%url, "Requesting topic words");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::new(format!("Word source request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::new(format!(
                "Word source returned {}",
                status
            )));
        }

        let entries: Vec<DatamuseEntry> = response
            .json()
            .await
            .map_err(|e| SourceError::new(format!("Failed to parse word list: {}", e)))?;

        let received = entries.len();
        let words = usable_words(entries.into_iter().map(|e| e.word));
        info!(received, usable = words.len(), "Fetched topic words");
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_words_drops_multi_token_entries() {
        let words = usable_words(["guitar", "hip hop", "rock and roll", "Piano"]);
        assert_eq!(words, vec!["guitar", "piano"]);
    }

    #[test]
    fn test_usable_words_drops_non_letters() {
        let words = usable_words(["rock-n-roll", "mp3", "", "drum"]);
        assert_eq!(words, vec!["drum"]);
    }

    #[test]
    fn test_entries_ignore_extra_fields() {
        let entries: Vec<DatamuseEntry> =
            serde_json::from_str(r#"[{"word":"jazz","score":1234,"tags":["n"]}]"#).unwrap();
        assert_eq!(entries[0].word, "jazz");
    }

    #[tokio::test]
    async fn test_empty_topic_is_rejected_before_request() {
        let client =
            DatamuseClient::new("http://127.0.0.1:9".to_string(), 10, Duration::from_secs(1))
                .unwrap();
        assert!(client.get_words("   ").await.is_err());
    }
}

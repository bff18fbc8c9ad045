//! Word definitions from a Free Dictionary API compatible service.

use super::{Definition, DefinitionLookup, Meaning, SourceError, http_client};
use crate::config::HangmanConfig;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument};

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    meanings: Vec<EntryMeaning>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryMeaning {
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<EntryDefinition>,
}

#[derive(Debug, Deserialize)]
struct EntryDefinition {
    definition: String,
}

/// Parses a dictionary response body into a [`Definition`].
///
/// Meanings for the same part of speech across entries are merged.
#[instrument(skip(body))]
pub fn definition_from_json(word: &str, body: &str) -> Result<Definition, SourceError> {
    let entries: Vec<Entry> = serde_json::from_str(body)
        .map_err(|e| SourceError::new(format!("Failed to parse definition: {}", e)))?;

    let mut meanings: Vec<Meaning> = Vec::new();
    for meaning in entries.into_iter().flat_map(|e| e.meanings) {
        let texts = meaning.definitions.into_iter().map(|d| d.definition);
        match meanings
            .iter_mut()
            .find(|m| m.part_of_speech == meaning.part_of_speech)
        {
            Some(existing) => existing.definitions.extend(texts),
            None => meanings.push(Meaning {
                part_of_speech: meaning.part_of_speech,
                definitions: texts.collect(),
            }),
        }
    }

    meanings.retain(|m| !m.definitions.is_empty());
    if meanings.is_empty() {
        return Err(SourceError::new(format!("No definitions found for {:?}", word)));
    }

    Ok(Definition {
        word: word.to_string(),
        meanings,
    })
}

/// HTTP client for `GET {base_url}/{word}`.
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    client: reqwest::Client,
    base_url: String,
}

impl DictionaryClient {
    /// Creates a client for the given endpoint.
    #[instrument]
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, SourceError> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url,
        })
    }

    /// Creates a client from the game configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &HangmanConfig) -> Result<Self, SourceError> {
        Self::new(config.dictionary_url().clone(), config.request_timeout())
    }
}

#[async_trait::async_trait]
impl DefinitionLookup for DictionaryClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn meaning(&self, word: &str) -> Result<Definition, SourceError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), word);
        let url = reqwest::Url::parse(&url)
            .map_err(|e| SourceError::new(format!("Invalid dictionary URL: {}", e)))?;

        debug!(%url, "Requesting definition");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::new(format!("Dictionary request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SourceError::new(format!("Failed to read definition: {}", e)))?;

        if !status.is_success() {
            return Err(SourceError::new(format!(
                "Dictionary returned {} for {:?}",
                status, word
            )));
        }

        let definition = definition_from_json(word, &body)?;
        info!(meanings = definition.meanings.len(), "Fetched definition");
        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUITAR: &str = r#"[
        {
            "word": "guitar",
            "phonetic": "/ɡɪˈtɑː/",
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        {"definition": "A stringed musical instrument.", "synonyms": []}
                    ]
                },
                {
                    "partOfSpeech": "verb",
                    "definitions": [{"definition": "To play a guitar."}]
                }
            ]
        },
        {
            "word": "guitar",
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [{"definition": "A guitarist."}]
                }
            ]
        }
    ]"#;

    #[test]
    fn test_parse_merges_parts_of_speech() {
        let definition = definition_from_json("guitar", GUITAR).unwrap();
        assert_eq!(definition.word, "guitar");
        assert_eq!(definition.meanings.len(), 2);
        assert_eq!(definition.meanings[0].part_of_speech, "noun");
        assert_eq!(
            definition.meanings[0].definitions,
            vec!["A stringed musical instrument.", "A guitarist."]
        );
        assert_eq!(definition.meanings[1].definitions, vec!["To play a guitar."]);
    }

    #[test]
    fn test_not_found_body_is_error() {
        let body = r#"{"title":"No Definitions Found","message":"Sorry pal"}"#;
        assert!(definition_from_json("zzxq", body).is_err());
    }

    #[test]
    fn test_entries_without_definitions_are_error() {
        assert!(definition_from_json("word", r#"[{"word":"word","meanings":[]}]"#).is_err());
    }
}

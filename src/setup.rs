//! Match setup: round and player counts, topic selection.
//!
//! Counts are parsed as integers and range-checked; an invalid count is a
//! configuration error and ends setup. A topic with no usable words is
//! never fatal: the player is asked for another one.

use crate::config::ConfigError;
use crate::games::hangman::PlayerState;
use crate::players::{InputError, Prompt};
use crate::sources::{WordSource, usable_words};
use derive_more::{Display, Error, From};
use tracing::{info, instrument, warn};

/// Shown once at start-up.
pub const BANNER: &str = r"
********************************************
                HANGMAN GAME
********************************************
   +---+
   O   |
  /|\  |
  / \  |
      ===

 1. Multiplayer: players take turns each round
 2. Pick a topic of interest (music, sports, ...)
 3. Learn each word's definition after the round
";

/// Topic question, as asked by the console.
pub const TOPIC_QUESTION: &str = "Category of interest? (Music, Fashion, Sports, Comedy, etc): ";

/// Error raised while setting up a match.
#[derive(Debug, Display, Error, From)]
pub enum SetupError {
    /// Invalid answer to a count question.
    #[display("Match setup rejected")]
    Config(ConfigError),
    /// Input stopped.
    #[display("Match setup aborted: no more input")]
    Input(InputError),
}

/// Parses a positive count such as the number of rounds.
#[instrument]
pub fn parse_count(raw: &str, what: &str) -> Result<u32, ConfigError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        ConfigError::new(format!("{} must be a whole number (got {:?})", what, trimmed))
    })?;

    if value <= 0 {
        return Err(ConfigError::new(format!("{} must be greater than 0", what)));
    }

    u32::try_from(value).map_err(|_| ConfigError::new(format!("{} is too large", what)))
}

/// Uses `given` if present, otherwise asks, then validates the count.
#[instrument(skip(prompt))]
pub async fn resolve_count<P>(
    prompt: &mut P,
    given: Option<u32>,
    question: &str,
    what: &str,
) -> Result<u32, SetupError>
where
    P: Prompt + ?Sized,
{
    let raw = match given {
        Some(count) => count.to_string(),
        None => prompt.ask(question).await?,
    };
    Ok(parse_count(&raw, what)?)
}

/// Asks for topics until one yields at least one usable word.
///
/// `first` is tried before asking. Source failures and lists with
/// only unusable entries count as "no words".
#[instrument(skip(prompt, source))]
pub async fn choose_topic<P, S>(
    prompt: &mut P,
    source: &S,
    first: Option<String>,
) -> Result<(String, Vec<String>), InputError>
where
    P: Prompt + ?Sized,
    S: WordSource + ?Sized,
{
    let mut candidate = first;

    loop {
        let topic = match candidate.take() {
            Some(topic) => topic,
            None => prompt.ask(TOPIC_QUESTION).await?,
        };
        let topic = topic.trim().to_string();

        let words = match source.get_words(&topic).await {
            Ok(words) => usable_words(&words),
            Err(error) => {
                warn!(%error, topic, "Word source unavailable");
                Vec::new()
            }
        };

        if words.is_empty() {
            prompt.notify(&format!("No word list matching category: {}", topic));
            continue;
        }

        info!(topic, words = words.len(), "Topic chosen");
        return Ok((topic, words));
    }
}

/// Creates `Player 1` to `Player N`.
pub fn numbered_players(count: u32) -> Vec<PlayerState> {
    (1..=count)
        .map(|n| PlayerState::new(format!("Player {}", n)))
        .collect()
}

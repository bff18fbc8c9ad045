//! Automatic player guessing by English letter frequency.

use super::{Guesser, InputError};
use crate::games::hangman::{BoardView, Letter};
use tracing::debug;

/// Letters from most to least common in English text.
const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Guesses the most common letter not yet tried.
#[derive(Debug, Clone)]
pub struct FrequencyGuesser {
    name: String,
}

impl FrequencyGuesser {
    /// Creates a frequency guesser.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Picks the next letter for a board, if any are left.
    pub fn pick(view: &BoardView) -> Option<Letter> {
        FREQUENCY_ORDER
            .chars()
            .filter_map(|c| Letter::from_char(c).ok())
            .find(|&l| !view.has_guessed(l))
    }
}

#[async_trait::async_trait]
impl Guesser for FrequencyGuesser {
    async fn next_guess(&mut self, view: &BoardView) -> Result<String, InputError> {
        let letter = Self::pick(view)
            .ok_or_else(|| InputError::new("Every letter has already been guessed"))?;
        debug!(guesser = %self.name, %letter, "Auto guess");
        Ok(letter.to_string())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::RoundStatus;

    fn view(guessed: &str) -> BoardView {
        BoardView {
            player: "bot".to_string(),
            miss_count: 0,
            masked: "___".to_string(),
            missed: Vec::new(),
            guessed: guessed.chars().map(|c| Letter::from_char(c).unwrap()).collect(),
            status: RoundStatus::AwaitingGuess,
        }
    }

    #[test]
    fn test_picks_most_common_first() {
        assert_eq!(FrequencyGuesser::pick(&view("")).unwrap().as_char(), 'e');
        assert_eq!(FrequencyGuesser::pick(&view("eta")).unwrap().as_char(), 'o');
    }

    #[test]
    fn test_nothing_left_after_full_alphabet() {
        assert_eq!(FrequencyGuesser::pick(&view(FREQUENCY_ORDER)), None);
    }

    #[tokio::test]
    async fn test_next_guess_skips_guessed() {
        let mut guesser = FrequencyGuesser::new("bot");
        assert_eq!(guesser.next_guess(&view("e")).await.unwrap(), "t");
    }
}

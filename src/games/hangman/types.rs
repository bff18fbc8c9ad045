//! Core domain types for hangman.

use super::guess::Letter;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::instrument;

/// The word a player is trying to uncover.
///
/// Always non-empty, ASCII alphabetic and lowercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SecretWord(String);

impl SecretWord {
    /// Validates and normalizes a candidate word.
    #[instrument]
    pub fn new(word: &str) -> Result<Self, WordError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(c) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(word.to_string(), c));
        }
        Ok(Self(word.to_ascii_lowercase()))
    }

    /// Returns the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a secret word is never empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the letters of the word in order, repeats included.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.chars().filter_map(|c| Letter::from_char(c).ok())
    }

    /// The set of distinct letters a player must find to win.
    pub fn distinct_letters(&self) -> BTreeSet<Letter> {
        self.letters().collect()
    }

    /// Returns true if the letter occurs anywhere in the word.
    pub fn contains(&self, letter: Letter) -> bool {
        self.0.contains(letter.as_char())
    }

    /// Shows revealed letters in place and `_` for the rest.
    pub fn mask(&self, revealed: &BTreeSet<Letter>) -> String {
        self.letters()
            .map(|l| if revealed.contains(&l) { l.as_char() } else { '_' })
            .collect()
    }
}

impl std::fmt::Display for SecretWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reason a candidate word cannot be used as a secret word.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum WordError {
    /// The candidate was empty or whitespace.
    #[display("Secret word cannot be empty")]
    Empty,

    /// The candidate contained a character that cannot be guessed.
    #[display("Word {:?} contains non-letter {:?}", _0, _1)]
    InvalidCharacter(String, char),
}

impl std::error::Error for WordError {}

/// State of a round, as seen by reporting code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum RoundStatus {
    /// Waiting for the player's next guess.
    #[strum(to_string = "awaiting guess")]
    AwaitingGuess,
    /// Every distinct letter was found.
    #[strum(to_string = "won")]
    Won,
    /// The miss limit was reached.
    #[strum(to_string = "lost")]
    Lost,
}

/// Snapshot of a round for renderers and guessers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Name of the player whose turn it is.
    pub player: String,
    /// Misses so far this round (0-6).
    pub miss_count: usize,
    /// Secret word with unguessed letters replaced by `_`.
    pub masked: String,
    /// Missed letters in the order they were guessed.
    pub missed: Vec<Letter>,
    /// Every letter guessed this round.
    pub guessed: Vec<Letter>,
    /// Round status.
    pub status: RoundStatus,
}

impl BoardView {
    /// Returns true if the letter was already guessed this round.
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> BTreeSet<Letter> {
        s.chars().map(|c| Letter::from_char(c).unwrap()).collect()
    }

    #[test]
    fn test_new_normalizes_case() {
        let word = SecretWord::new(" Guitar ").unwrap();
        assert_eq!(word.as_str(), "guitar");
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(SecretWord::new("  "), Err(WordError::Empty));
    }

    #[test]
    fn test_new_rejects_non_letters() {
        assert!(matches!(
            SecretWord::new("rock-n-roll"),
            Err(WordError::InvalidCharacter(_, '-'))
        ));
        assert!(matches!(
            SecretWord::new("hip hop"),
            Err(WordError::InvalidCharacter(_, ' '))
        ));
        assert!(SecretWord::new("mp3").is_err());
    }

    #[test]
    fn test_distinct_letters_collapses_repeats() {
        let word = SecretWord::new("mississippi").unwrap();
        assert_eq!(word.distinct_letters(), letters("misp"));
    }

    #[test]
    fn test_mask_reveals_every_occurrence() {
        let word = SecretWord::new("banana").unwrap();
        assert_eq!(word.mask(&BTreeSet::new()), "______");
        assert_eq!(word.mask(&letters("a")), "_a_a_a");
        assert_eq!(word.mask(&letters("abn")), "banana");
    }

    #[test]
    fn test_contains() {
        let word = SecretWord::new("cat").unwrap();
        assert!(word.contains(Letter::from_char('C').unwrap()));
        assert!(!word.contains(Letter::from_char('z').unwrap()));
    }
}

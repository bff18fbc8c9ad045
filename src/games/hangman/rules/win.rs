//! Win detection for hangman.

use super::super::{Letter, SecretWord};
use std::collections::BTreeSet;
use tracing::instrument;

/// Checks whether every distinct letter of the secret has been found.
///
/// Repeated letters only need to be guessed once: "mississippi" is solved
/// by `{m, i, s, p}`.
#[instrument(skip(correct))]
pub fn is_solved(secret: &SecretWord, correct: &BTreeSet<Letter>) -> bool {
    secret.distinct_letters().is_subset(correct)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> BTreeSet<Letter> {
        s.chars().map(|c| Letter::from_char(c).unwrap()).collect()
    }

    #[test]
    fn test_unsolved_with_no_guesses() {
        let secret = SecretWord::new("cat").unwrap();
        assert!(!is_solved(&secret, &BTreeSet::new()));
    }

    #[test]
    fn test_solved_in_any_order() {
        let secret = SecretWord::new("cat").unwrap();
        assert!(is_solved(&secret, &letters("tac")));
    }

    #[test]
    fn test_repeated_letters_need_one_guess() {
        let secret = SecretWord::new("mississippi").unwrap();
        assert!(!is_solved(&secret, &letters("mis")));
        assert!(is_solved(&secret, &letters("misp")));
    }
}

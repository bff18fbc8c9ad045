//! Tests for the hangman round typestate.

use strictly_hangman::{
    GuessError, Letter, MAX_MISSES, Outcome, PlayerState, RoundInProgress, RoundResult,
    RoundSetup, RoundStatus, SecretWord,
};

fn start(word: &str) -> RoundInProgress {
    RoundSetup::new(SecretWord::new(word).expect("valid word")).start(PlayerState::new("Player 1"))
}

fn letters(raw: &str) -> Vec<Letter> {
    raw.chars()
        .map(|c| Letter::from_char(c).expect("letter"))
        .collect()
}

fn guess(round: RoundInProgress, c: char) -> RoundResult {
    round
        .guess(Letter::from_char(c).expect("letter"))
        .expect("legal guess")
}

fn in_progress(result: RoundResult) -> RoundInProgress {
    match result {
        RoundResult::InProgress(r) => r,
        RoundResult::Finished(_) => panic!("Round shouldn't be finished yet"),
    }
}

#[test]
fn test_all_correct_guesses_win() {
    for order in ["act", "cat", "tca"] {
        let result = start("cat").replay(&letters(order)).expect("legal guesses");
        let RoundResult::Finished(finished) = result else {
            panic!("Round should be won after {}", order);
        };
        assert_eq!(finished.outcome(), Outcome::Won);
        assert_eq!(finished.miss_count(), 0);
        assert_eq!(finished.status(), RoundStatus::Won);
        assert_eq!(finished.view().masked, "cat");
    }
}

#[test]
fn test_six_misses_lose() {
    let result = start("cat").replay(&letters("xyzqwe")).expect("legal guesses");
    let RoundResult::Finished(finished) = result else {
        panic!("Round should be lost");
    };
    assert_eq!(finished.outcome(), Outcome::Lost);
    assert_eq!(finished.miss_count(), MAX_MISSES);
    assert_eq!(finished.status(), RoundStatus::Lost);
    assert_eq!(finished.view().masked, "___");
}

#[test]
fn test_five_misses_still_in_progress() {
    let round = in_progress(start("cat").replay(&letters("xyzqw")).expect("legal guesses"));
    assert_eq!(round.miss_count(), 5);
    assert_eq!(round.misses_remaining(), 1);
    assert_eq!(round.status(), RoundStatus::AwaitingGuess);
}

#[test]
fn test_repeated_letters_revealed_together() {
    let mut round = start("mississippi");
    for c in ['s', 'i', 'p'] {
        round = in_progress(guess(round, c));
    }
    assert_eq!(round.view().masked, "_ississippi");

    match guess(round, 'm') {
        RoundResult::Finished(finished) => {
            assert_eq!(finished.outcome(), Outcome::Won);
            assert_eq!(finished.miss_count(), 0);
        }
        RoundResult::InProgress(_) => panic!("Round should be won"),
    }
}

#[test]
fn test_repeated_guess_is_rejected_without_state_change() {
    let round = in_progress(guess(start("cat"), 'x'));
    let before = round.view();

    let rejected = round
        .guess(Letter::from_char('x').expect("letter"))
        .expect_err("repeat must be rejected");
    assert!(matches!(rejected.error(), GuessError::AlreadyGuessed(_)));

    let (round, _) = rejected.into_parts();
    assert_eq!(round.view(), before);
    assert_eq!(round.miss_count(), 1);
}

#[test]
fn test_repeated_hit_is_rejected() {
    let round = in_progress(guess(start("cat"), 'a'));
    assert!(matches!(round.check("a"), Err(GuessError::AlreadyGuessed(_))));
    assert!(matches!(round.check("A"), Err(GuessError::AlreadyGuessed(_))));
}

#[test]
fn test_uppercase_input_matches_lowercase_word() {
    let round = start("cat");
    let letter = round.check(" C ").expect("single letter");
    let round = in_progress(round.guess(letter).expect("legal guess"));
    assert_eq!(round.view().masked, "c__");
}

#[test]
fn test_invalid_input_rejected_by_check() {
    let round = start("cat");
    assert!(matches!(round.check("ab"), Err(GuessError::NotSingleLetter(_))));
    assert!(matches!(round.check(""), Err(GuessError::NotSingleLetter(_))));
    assert!(matches!(round.check("7"), Err(GuessError::NotALetter('7'))));
    assert!(matches!(round.check("?"), Err(GuessError::NotALetter('?'))));
    assert_eq!(round.miss_count(), 0);
}

#[test]
fn test_guessed_letters_partition_into_hits_and_misses() {
    let round = in_progress(start("hangman").replay(&letters("aezn")).expect("legal"));
    let player = round.player();

    let hits = player.correct_letters();
    let misses: std::collections::BTreeSet<_> = player.missed_letters().iter().copied().collect();
    assert!(hits.is_disjoint(&misses));

    let union: std::collections::BTreeSet<_> = hits.union(&misses).copied().collect();
    assert_eq!(&union, player.guessed_letters());
    assert_eq!(player.missed_letters().len(), round.miss_count());
}

#[test]
fn test_missed_letters_keep_guess_order() {
    let round = in_progress(start("cat").replay(&letters("zqa")).expect("legal"));
    let view = round.view();
    let missed: String = view.missed.iter().map(|l| l.as_char()).collect();
    assert_eq!(missed, "zq");
}

#[test]
fn test_start_resets_round_state_but_keeps_score() {
    let mut player = PlayerState::new("Player 1");
    player.award_win();

    let round = RoundSetup::new(SecretWord::new("dog").expect("word")).start(player);
    let finished = match round.replay(&letters("dog")).expect("legal") {
        RoundResult::Finished(f) => f,
        RoundResult::InProgress(_) => panic!("Round should be won"),
    };
    let player = finished.into_player();
    assert_eq!(player.score(), 1);

    let round = RoundSetup::new(SecretWord::new("fox").expect("word")).start(player);
    assert!(round.player().guessed_letters().is_empty());
    assert_eq!(round.miss_count(), 0);
    assert_eq!(round.player().score(), 1);
}

//! Property-based tests for hands, scoring and Hangman bookkeeping

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use word_games::commands::{GuessFeedback, HangmanRound, RoundStatus};
use word_games::core::letters::{FULL_HAND_BONUS, VOWELS, letter_value};
use word_games::core::{
    GuessedLetters, Hand, WordRepository, available_letters, deal_hand, guessed_word,
    is_valid_word, is_word_guessed, word_score,
};

fn lowercase_word(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(b'a'..=b'z', 0..=max_len)
        .prop_map(|bytes| String::from_utf8(bytes).unwrap())
}

/// Property: a dealt hand always holds exactly n letters, n/3 of them vowels
#[test]
fn prop_deal_hand_size_and_vowel_quota() {
    proptest!(|(n in 0usize..64, seed in any::<u64>())| {
        let hand = deal_hand(n, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(hand.len(), n);
        prop_assert!(hand.vowel_count() >= n / 3);
        prop_assert_eq!(hand.letters().len(), n);
    });
}

/// Property: every dealt letter is a lowercase ASCII letter
#[test]
fn prop_deal_hand_letters_are_lowercase() {
    proptest!(|(n in 0usize..32, seed in any::<u64>())| {
        let hand = deal_hand(n, &mut StdRng::seed_from_u64(seed));
        prop_assert!(hand.letters().iter().all(u8::is_ascii_lowercase));

        let vowels = hand.letters().iter().filter(|l| VOWELS.contains(*l)).count();
        prop_assert_eq!(vowels, hand.vowel_count());
    });
}

/// Property: validation never changes the hand, whatever the answer
#[test]
fn prop_validation_does_not_mutate_hand() {
    proptest!(|(letters in lowercase_word(12), word in lowercase_word(8))| {
        let repository = WordRepository::new([word.as_str(), "cat", "dog"]);
        let hand = Hand::from_letters(&letters);
        let before = hand.clone();

        let _ = is_valid_word(&word, &hand, &repository);
        prop_assert_eq!(&hand, &before);
    });
}

/// Property: spending a spellable word removes exactly its letters
#[test]
fn prop_update_spends_exact_letters() {
    proptest!(|(word in lowercase_word(8), extra in lowercase_word(8))| {
        let hand = Hand::from_letters(&format!("{word}{extra}"));
        let next = hand.update(&word).unwrap();

        prop_assert_eq!(next.len(), hand.len() - word.len());
        prop_assert_eq!(next, Hand::from_letters(&extra));
    });
}

/// Property: overspending is refused instead of going negative
#[test]
fn prop_update_refuses_overspending() {
    proptest!(|(letters in lowercase_word(10), word in lowercase_word(10))| {
        let hand = Hand::from_letters(&letters);

        match hand.update(&word) {
            Ok(next) => prop_assert_eq!(next.len() + word.len(), hand.len()),
            Err(_) => prop_assert!(!hand.can_spell(&word)),
        }
    });
}

/// Property: a valid word is always one the hand can spell
#[test]
fn prop_valid_word_is_spellable() {
    proptest!(|(letters in lowercase_word(10), word in lowercase_word(6))| {
        let repository = WordRepository::new([word.as_str()]);
        let hand = Hand::from_letters(&letters);

        prop_assert_eq!(
            is_valid_word(&word, &hand, &repository),
            !word.is_empty() && hand.can_spell(&word)
        );
    });
}

/// Property: score is letter sum times length, plus the bonus on a full hand
#[test]
fn prop_score_formula() {
    proptest!(|(word in lowercase_word(12), hand_size in 0usize..16)| {
        let sum: u32 = word.bytes().map(letter_value).sum();
        let mut expected = sum * word.len() as u32;
        if !word.is_empty() && word.len() == hand_size {
            expected += FULL_HAND_BONUS;
        }

        prop_assert_eq!(word_score(&word, hand_size), expected);
    });
}

/// Property: the masked word keeps three characters per letter of the secret
#[test]
fn prop_masked_word_preserves_positions() {
    proptest!(|(secret in lowercase_word(12), guesses in lowercase_word(26))| {
        let guessed: GuessedLetters = guesses.bytes().collect();
        let masked = guessed_word(&secret, &guessed);

        prop_assert_eq!(masked.len(), secret.len() * 3);
        for (i, letter) in secret.bytes().enumerate() {
            let shown = masked.as_bytes()[i * 3 + 1];
            if guessed.contains(letter) {
                prop_assert_eq!(shown, letter);
            } else {
                prop_assert_eq!(shown, b'_');
            }
        }
    });
}

/// Property: the word is guessed exactly when no placeholder is left
#[test]
fn prop_word_guessed_iff_fully_revealed() {
    proptest!(|(secret in lowercase_word(10), guesses in lowercase_word(26))| {
        let guessed: GuessedLetters = guesses.bytes().collect();
        prop_assert_eq!(
            is_word_guessed(&secret, &guessed),
            !guessed_word(&secret, &guessed).contains('_')
        );
    });
}

/// Property: available letters and guessed letters partition the alphabet
#[test]
fn prop_available_letters_complement_guesses() {
    proptest!(|(guesses in lowercase_word(40))| {
        let guessed: GuessedLetters = guesses.bytes().collect();
        let available = available_letters(&guessed);

        prop_assert_eq!(available.len() + guessed.len(), 26);
        prop_assert!(available.bytes().all(|l| !guessed.contains(l)));
    });
}

/// Property: guesses left only drop on new wrong letters
#[test]
fn prop_hangman_guesses_only_drop_on_new_misses() {
    proptest!(|(secret in lowercase_word(8), guesses in lowercase_word(30))| {
        let mut round = HangmanRound::new(&secret, 8);

        for letter in guesses.chars() {
            if round.status() != RoundStatus::InProgress {
                break;
            }
            let before = round.guesses_left();
            let feedback = round.guess(&letter.to_string());

            let expected = if feedback == GuessFeedback::Incorrect { before - 1 } else { before };
            prop_assert_eq!(round.guesses_left(), expected);
            if feedback == GuessFeedback::Incorrect {
                prop_assert!(!secret.contains(letter));
            }
        }
    });
}

/// Property: eight distinct misses always lose the round
#[test]
fn prop_hangman_eight_misses_lose() {
    proptest!(|(seed in any::<u64>())| {
        let words = WordRepository::new(["cat", "dog", "bird", "fish"]);
        let secret = words.choose(&mut StdRng::seed_from_u64(seed)).unwrap().to_string();
        let mut round = HangmanRound::new(&secret, 8);

        let misses: Vec<char> = ('a'..='z').filter(|c| !secret.contains(*c)).take(8).collect();
        for (i, letter) in misses.iter().enumerate() {
            prop_assert_eq!(round.status(), RoundStatus::InProgress);
            round.guess(&letter.to_string());
            prop_assert_eq!(round.guesses_left(), 7 - i as u32);
        }

        prop_assert_eq!(round.status(), RoundStatus::Lost);
    });
}

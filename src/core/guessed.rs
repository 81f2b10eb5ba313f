//! Hangman guess bookkeeping
//!
//! Tracks which letters have been tried and derives the masked word and the
//! remaining alphabet from them.

use super::letters::ALPHABET;
use rustc_hash::FxHashSet;

/// Letters the player has guessed so far
///
/// Only grows during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: FxHashSet<u8>,
}

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guess
    ///
    /// Returns `false` if the letter had already been guessed.
    pub fn insert(&mut self, letter: u8) -> bool {
        self.letters.insert(letter.to_ascii_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter.to_ascii_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl FromIterator<u8> for GuessedLetters {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut guessed = Self::new();
        for letter in iter {
            guessed.insert(letter);
        }
        guessed
    }
}

impl FromIterator<char> for GuessedLetters {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        iter.into_iter()
            .filter(char::is_ascii)
            .map(|c| c as u8)
            .collect()
    }
}

/// Check whether every letter of `secret` has been guessed
///
/// # Examples
/// ```
/// use word_games::core::{GuessedLetters, is_word_guessed};
///
/// let guessed: GuessedLetters = ['c', 'a', 't'].into_iter().collect();
/// assert!(is_word_guessed("cat", &guessed));
/// ```
#[must_use]
pub fn is_word_guessed(secret: &str, guessed: &GuessedLetters) -> bool {
    secret.bytes().all(|letter| guessed.contains(letter))
}

/// Render `secret` with unguessed letters hidden
///
/// Each guessed letter shows as ` x ` and each hidden one as ` _ `, so the
/// output always has three characters per letter of the secret.
///
/// # Examples
/// ```
/// use word_games::core::{GuessedLetters, guessed_word};
///
/// let guessed: GuessedLetters = ['c'].into_iter().collect();
/// assert_eq!(guessed_word("cat", &guessed), " c  _  _ ");
/// ```
#[must_use]
pub fn guessed_word(secret: &str, guessed: &GuessedLetters) -> String {
    let mut masked = String::with_capacity(secret.len() * 3);
    for letter in secret.bytes() {
        masked.push(' ');
        masked.push(if guessed.contains(letter) {
            char::from(letter)
        } else {
            '_'
        });
        masked.push(' ');
    }
    masked
}

/// Letters of the alphabet not yet guessed, in order
#[must_use]
pub fn available_letters(guessed: &GuessedLetters) -> String {
    ALPHABET
        .iter()
        .filter(|&&letter| !guessed.contains(letter))
        .map(|&letter| char::from(letter))
        .collect()
}

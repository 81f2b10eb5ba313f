//! Anagram hand representation
//!
//! A Hand is a multiset of letters stored as letter counts. Letters whose
//! count drops to zero are removed, so two hands holding the same letters are
//! always equal.

use super::WordRepository;
use super::letters::{ALPHABET, CONSONANTS, VOWELS, is_vowel};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// Letters available to the Anagram player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    counts: FxHashMap<u8, u32>,
}

/// Error type for spending letters a hand does not hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    MissingLetter(char),
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLetter(letter) => {
                write!(f, "Hand has no '{letter}' left to spend")
            }
        }
    }
}

impl std::error::Error for HandError {}

impl Hand {
    /// Create an empty hand
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from a string of letters
    ///
    /// Letters are lowercased; anything that is not an ASCII letter is ignored.
    ///
    /// # Examples
    /// ```
    /// use word_games::core::Hand;
    ///
    /// let hand = Hand::from_letters("Hello");
    /// assert_eq!(hand.count(b'l'), 2);
    /// assert_eq!(hand.len(), 5);
    /// ```
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        letters.bytes().collect()
    }

    /// How many copies of `letter` remain
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        self.counts
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// Total number of letters remaining
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().map(|&count| count as usize).sum()
    }

    /// Check if every letter has been used up
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of vowels remaining
    #[must_use]
    pub fn vowel_count(&self) -> usize {
        self.counts
            .iter()
            .filter(|&(&letter, _)| is_vowel(letter))
            .map(|(_, &count)| count as usize)
            .sum()
    }

    /// Remaining letters in alphabetical order
    #[must_use]
    pub fn letters(&self) -> Vec<u8> {
        ALPHABET
            .iter()
            .flat_map(|&letter| std::iter::repeat_n(letter, self.count(letter) as usize))
            .collect()
    }

    /// Check whether `word` can be spelled from this hand
    ///
    /// Works on a scratch copy, so the hand itself is never touched.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        self.update(word).is_ok()
    }

    /// Spend the letters of `word`, returning the hand that remains
    ///
    /// # Errors
    /// Returns `HandError::MissingLetter` if the word needs more copies of a
    /// letter than the hand holds. The hand is left unchanged either way.
    pub fn update(&self, word: &str) -> Result<Self, HandError> {
        let mut next = self.clone();

        for letter in word.bytes().map(|b| b.to_ascii_lowercase()) {
            let Some(count) = next.counts.get_mut(&letter) else {
                return Err(HandError::MissingLetter(char::from(letter)));
            };

            *count -= 1;
            if *count == 0 {
                next.counts.remove(&letter);
            }
        }

        Ok(next)
    }

    fn add(&mut self, letter: u8) {
        *self.counts.entry(letter).or_insert(0) += 1;
    }
}

impl FromIterator<u8> for Hand {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut hand = Self::new();
        for letter in iter {
            let letter = letter.to_ascii_lowercase();
            if letter.is_ascii_lowercase() {
                hand.add(letter);
            }
        }
        hand
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters().into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

/// Deal a random hand of `n` letters
///
/// `n / 3` letters are vowels, the rest consonants. Each letter is drawn
/// uniformly (with replacement) from its group.
pub fn deal_hand<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Hand {
    let num_vowels = n / 3;
    let mut hand = Hand::new();

    for _ in 0..num_vowels {
        hand.add(VOWELS[rng.random_range(0..VOWELS.len())]);
    }

    for _ in num_vowels..n {
        hand.add(CONSONANTS[rng.random_range(0..CONSONANTS.len())]);
    }

    hand
}

/// Check that `word` is in the repository and can be spelled from `hand`
///
/// The comparison is case-insensitive. The empty string is never valid.
///
/// # Examples
/// ```
/// use word_games::core::{Hand, WordRepository, is_valid_word};
///
/// let repository = WordRepository::new(["rapture", "honey"]);
/// let hand = Hand::from_letters("raptuer");
///
/// assert!(is_valid_word("Rapture", &hand, &repository));
/// assert!(!is_valid_word("honey", &hand, &repository));
/// ```
#[must_use]
pub fn is_valid_word(word: &str, hand: &Hand, repository: &WordRepository) -> bool {
    if word.is_empty() {
        return false;
    }

    let word = word.to_lowercase();
    repository.contains(&word) && hand.can_spell(&word)
}

//! Alphabet constants and Scrabble-style word scoring
//!
//! Letters are handled as lowercase ASCII bytes throughout the crate.

/// Vowels a hand is guaranteed to draw from
pub const VOWELS: &[u8] = b"aeiou";

/// The 21 consonants used to fill the rest of a hand
pub const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";

/// The full lowercase alphabet, in order
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Flat bonus for a word that uses every letter of the dealt hand
pub const FULL_HAND_BONUS: u32 = 50;

/// Scrabble tile values, indexed by `letter - b'a'`
const LETTER_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // a-m
    1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // n-z
];

/// Point value of a single letter (case-insensitive)
///
/// Anything outside `a-z` is worth nothing.
#[inline]
#[must_use]
pub const fn letter_value(letter: u8) -> u32 {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        LETTER_VALUES[(lower - b'a') as usize]
    } else {
        0
    }
}

/// Check whether a byte is a vowel
#[inline]
#[must_use]
pub fn is_vowel(letter: u8) -> bool {
    VOWELS.contains(&letter.to_ascii_lowercase())
}

/// Score a word
///
/// The score is the sum of the letter values multiplied by the word length,
/// plus [`FULL_HAND_BONUS`] if the word uses all `hand_size` letters.
///
/// # Examples
/// ```
/// use word_games::core::word_score;
///
/// assert_eq!(word_score("cat", 10), 15);
/// assert_eq!(word_score("aeiou", 5), 75);
/// assert_eq!(word_score("", 0), 0);
/// ```
#[must_use]
pub fn word_score(word: &str, hand_size: usize) -> u32 {
    let len = word.len();
    if len == 0 {
        return 0;
    }

    let letters: u32 = word.bytes().map(letter_value).sum();
    let base = letters * len as u32;

    if len == hand_size {
        base + FULL_HAND_BONUS
    } else {
        base
    }
}

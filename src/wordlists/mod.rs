//! Word lists for the games
//!
//! Word lists are plain-text files read once at startup. The sample lists
//! shipped under `data/` are the defaults.

pub mod loader;

pub use loader::{WordListError, WordListFormat, load_from_file};

/// Default Anagram word list, one word per line
pub const ANAGRAM_WORDLIST: &str = "data/words_anagram.txt";

/// Default Hangman word list, whitespace-separated words
pub const HANGMAN_WORDLIST: &str = "data/words_hangman.txt";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_anagram_list_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words_anagram.txt");
        let words = load_from_file(path, WordListFormat::Lines).unwrap();

        assert!(!words.is_empty());
        for word in words.words() {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn bundled_hangman_list_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words_hangman.txt");
        let words = load_from_file(path, WordListFormat::Tokens).unwrap();

        assert!(!words.is_empty());
        assert!(words.words().iter().all(|w| !w.is_empty()));
    }
}

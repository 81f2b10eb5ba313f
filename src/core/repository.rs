//! The dictionary of valid words
//!
//! Built once at startup and handed to the game controllers by reference.

use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// An immutable, ordered collection of lowercase words
///
/// Keeps the words in load order for random selection and a hash index for
/// membership checks.
#[derive(Debug, Clone, Default)]
pub struct WordRepository {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl WordRepository {
    /// Build a repository from raw entries
    ///
    /// Entries are trimmed and lowercased. Blank entries and entries that are
    /// not made purely of ASCII letters are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_games::core::WordRepository;
    ///
    /// let repository = WordRepository::new(["  Apple ", "", "pear"]);
    /// assert_eq!(repository.len(), 2);
    /// assert!(repository.contains("apple"));
    /// ```
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut repository = Self::default();
        for entry in entries {
            if let Some(word) = normalize(entry.as_ref()) {
                repository.push(word);
            }
        }
        repository
    }

    pub(crate) fn push(&mut self, word: String) {
        self.index.insert(word.clone());
        self.words.push(word);
    }

    /// Check whether `word` is a known word (case-insensitive)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.index.contains(&word.to_ascii_lowercase())
        } else {
            self.index.contains(word)
        }
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words, counting duplicates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a word uniformly at random
    ///
    /// Returns `None` if the repository is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}

/// Trim and lowercase an entry, rejecting anything that is not a plain word
pub(crate) fn normalize(entry: &str) -> Option<String> {
    let word = entry.trim().to_lowercase();
    if !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()) {
        Some(word)
    } else {
        None
    }
}

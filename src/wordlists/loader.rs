//! Word list loading utilities
//!
//! Reads plain-text word lists into a [`WordRepository`].

use crate::core::{WordRepository, normalize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Layout of a word list file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListFormat {
    /// One word per line (Anagram)
    Lines,
    /// Whitespace-separated words, usually on a single line (Hangman)
    Tokens,
}

/// Error type for word list loading
#[derive(Debug)]
pub enum WordListError {
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Load words from a file
///
/// Blank entries are skipped silently; entries containing anything other
/// than ASCII letters are skipped with a warning.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_games::wordlists::loader::{WordListFormat, load_from_file};
///
/// let words = load_from_file("data/words_anagram.txt", WordListFormat::Lines).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    format: WordListFormat,
) -> Result<WordRepository, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let repository = parse(&content, format);
    info!(
        path = %path.display(),
        words = repository.len(),
        "loaded word list"
    );
    Ok(repository)
}

/// Parse word list text already in memory
#[must_use]
pub fn parse(content: &str, format: WordListFormat) -> WordRepository {
    match format {
        WordListFormat::Lines => collect(content.lines()),
        WordListFormat::Tokens => collect(content.split_whitespace()),
    }
}

fn collect<'a>(entries: impl Iterator<Item = &'a str>) -> WordRepository {
    let mut repository = WordRepository::default();
    let mut skipped = 0usize;

    for entry in entries {
        if let Some(word) = normalize(entry) {
            repository.push(word);
        } else if !entry.trim().is_empty() {
            skipped += 1;
        }
    }

    if skipped > 0 {
        warn!(skipped, "skipped word list entries that are not plain words");
    }

    repository
}

//! Word Games
//!
//! Two console word games: Anagram, where words built from a dealt hand are
//! scored like Scrabble, and Hangman.
//!
//! # Quick Start
//!
//! ```rust
//! use word_games::core::{Hand, WordRepository, is_valid_word, word_score};
//!
//! let repository = WordRepository::new(["quail", "tail"]);
//! let hand = Hand::from_letters("quailxy");
//!
//! assert!(is_valid_word("quail", &hand, &repository));
//! println!("quail scores {}", word_score("quail", 7));
//! ```

// Core game state
pub mod core;

// Word lists
pub mod wordlists;

// Game loops
pub mod commands;

// Terminal I/O and formatting
pub mod output;

//! Core game types
//!
//! Pure game state with no terminal I/O: the word repository, Anagram hands
//! and scoring, and Hangman guess bookkeeping.

mod guessed;
mod hand;
pub mod letters;
mod repository;

pub use guessed::{GuessedLetters, available_letters, guessed_word, is_word_guessed};
pub use hand::{Hand, HandError, deal_hand, is_valid_word};
pub use letters::word_score;
pub use repository::WordRepository;
pub(crate) use repository::normalize;

//! Game implementations
//!
//! Each game pairs a pure round state machine with an interactive driver
//! that talks to a [`Console`](crate::output::Console).

pub mod anagram;
pub mod hangman;

pub use anagram::{
    AnagramConfig, AnagramSession, HandEvent, HandOutcome, HandRound, MenuCommand, play_hand,
};
pub use hangman::{
    GuessFeedback, HangmanConfig, HangmanOutcome, HangmanRound, RoundStatus, play_hangman,
};

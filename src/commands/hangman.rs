//! Hangman game
//!
//! The player guesses one letter at a time. A wrong guess costs one of the
//! remaining guesses; repeating a letter is free. The round is won once every
//! letter of the secret word has been guessed.

use crate::core::{GuessedLetters, available_letters, guessed_word, is_word_guessed};
use crate::output::Console;
use crate::output::formatters::{ROUND_SEPARATOR, failure_line, success_line, summary_line};
use std::io::{self, BufRead, Write};
use tracing::{debug, trace};

/// Wrong guesses allowed per round
pub const MAX_GUESSES: u32 = 8;

const GUESS_PROMPT: &str = "Please guess a letter: ";

/// Configuration for a Hangman round
#[derive(Debug, Clone, Copy)]
pub struct HangmanConfig {
    pub max_guesses: u32,
}

impl HangmanConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
        }
    }
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFeedback {
    /// Not a single letter; nothing recorded
    Invalid,
    /// Letter was guessed before; no guess spent
    AlreadyGuessed,
    /// Letter is in the word
    Correct,
    /// Letter is not in the word; one guess spent
    Incorrect,
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// How an interactive round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangmanOutcome {
    Won,
    Lost,
    /// Input ran out before the round was decided
    Abandoned,
}

/// State of one Hangman round
#[derive(Debug, Clone)]
pub struct HangmanRound {
    secret: String,
    guessed: GuessedLetters,
    guesses_left: u32,
}

impl HangmanRound {
    #[must_use]
    pub fn new(secret: &str, max_guesses: u32) -> Self {
        Self {
            secret: secret.to_lowercase(),
            guessed: GuessedLetters::new(),
            guesses_left: max_guesses,
        }
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn guesses_left(&self) -> u32 {
        self.guesses_left
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    /// The secret with unguessed letters hidden
    #[must_use]
    pub fn masked(&self) -> String {
        guessed_word(&self.secret, &self.guessed)
    }

    /// Letters not yet tried
    #[must_use]
    pub fn available(&self) -> String {
        available_letters(&self.guessed)
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if is_word_guessed(&self.secret, &self.guessed) {
            RoundStatus::Won
        } else if self.guesses_left == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Apply one guess
    ///
    /// Input is trimmed and lowercased and must be exactly one ASCII letter.
    /// Only a new letter missing from the secret costs a guess.
    pub fn guess(&mut self, input: &str) -> GuessFeedback {
        let Some(letter) = parse_guess(input) else {
            return GuessFeedback::Invalid;
        };

        if !self.guessed.insert(letter) {
            return GuessFeedback::AlreadyGuessed;
        }

        if self.secret.as_bytes().contains(&letter) {
            GuessFeedback::Correct
        } else {
            self.guesses_left = self.guesses_left.saturating_sub(1);
            GuessFeedback::Incorrect
        }
    }
}

fn parse_guess(input: &str) -> Option<u8> {
    match input.trim().as_bytes() {
        &[letter] if letter.is_ascii_alphabetic() => Some(letter.to_ascii_lowercase()),
        _ => None,
    }
}

/// Play one round of Hangman interactively
///
/// # Errors
///
/// Returns an error if the console cannot be read or written.
pub fn play_hangman<R: BufRead, W: Write>(
    secret: &str,
    config: HangmanConfig,
    console: &mut Console<R, W>,
) -> io::Result<HangmanOutcome> {
    let mut round = HangmanRound::new(secret, config.max_guesses);
    trace!(secret = round.secret(), "chose secret word");

    console.say("Welcome to the game, Hangman!")?;
    console.say(format!(
        "I am thinking of a word that is {} letters long.",
        round.secret().len()
    ))?;
    console.blank()?;

    while round.status() == RoundStatus::InProgress {
        console.say(ROUND_SEPARATOR)?;
        console.blank()?;
        console.say(format!("You have {} guesses left.", round.guesses_left()))?;
        console.say(format!("Available letters: {}", round.available()))?;

        let Some(input) = console.prompt(GUESS_PROMPT)? else {
            console.say(ROUND_SEPARATOR)?;
            console.say(summary_line(&format!(
                "Game abandoned. The word was {}.",
                round.secret()
            )))?;
            return Ok(HangmanOutcome::Abandoned);
        };

        let feedback = round.guess(&input);
        debug!(guess = %input, ?feedback, left = round.guesses_left(), "guess");

        let message = match feedback {
            GuessFeedback::Invalid => "Oops! Please guess a single letter:",
            GuessFeedback::AlreadyGuessed => "Oops! You've already guessed that letter:",
            GuessFeedback::Correct => "Good guess:",
            GuessFeedback::Incorrect => "Oops! That letter is not in my word:",
        };
        console.say(format!("{message}  {}", round.masked()))?;

        if round.status() != RoundStatus::Won {
            console.blank()?;
        }
    }

    console.say(ROUND_SEPARATOR)?;
    if round.status() == RoundStatus::Won {
        console.say(success_line("Congratulations, you won!"))?;
        Ok(HangmanOutcome::Won)
    } else {
        console.say(failure_line(&format!(
            "Sorry, you ran out of guesses. The word was {}.",
            round.secret()
        )))?;
        Ok(HangmanOutcome::Lost)
    }
}

//! Anagram game
//!
//! Players build words from a dealt hand of letters. Each accepted word is
//! scored Scrabble-style and its letters leave the hand; the hand ends when
//! the player types "." or runs out of letters.

use crate::core::{Hand, WordRepository, deal_hand, is_valid_word, word_score};
use crate::output::Console;
use crate::output::formatters::summary_line;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Letters dealt per hand
pub const HAND_SIZE: usize = 10;

const WORD_PROMPT: &str = "Enter word, or a \".\" to indicate that you are finished: ";
const MENU_PROMPT: &str =
    "Enter n to deal a new hand, r to replay the last hand, or e to end game: ";

/// Configuration for an Anagram session
#[derive(Debug, Clone, Copy)]
pub struct AnagramConfig {
    pub hand_size: usize,
}

impl AnagramConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand_size: HAND_SIZE,
        }
    }
}

impl Default for AnagramConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// What happened to one line of input during a hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandEvent {
    /// The word was valid; its letters were spent
    Accepted {
        word: String,
        points: u32,
        total: u32,
    },
    /// Not a word, or not spellable from the hand; nothing changed
    Rejected,
    /// The player typed "."
    Quit { total: u32 },
}

/// How a hand finished, with its final score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    Quit(u32),
    Exhausted(u32),
}

impl HandOutcome {
    #[must_use]
    pub const fn score(self) -> u32 {
        match self {
            Self::Quit(score) | Self::Exhausted(score) => score,
        }
    }
}

/// State of a single hand being played
///
/// The hand is replaced by a fresh value after every accepted word, never
/// edited in place.
pub struct HandRound<'a> {
    repository: &'a WordRepository,
    hand: Hand,
    hand_size: usize,
    score: u32,
}

impl<'a> HandRound<'a> {
    /// Start a hand
    ///
    /// `hand_size` is the size the hand was dealt with; a word of exactly
    /// that length earns the full-hand bonus.
    #[must_use]
    pub const fn new(hand: Hand, repository: &'a WordRepository, hand_size: usize) -> Self {
        Self {
            repository,
            hand,
            hand_size,
            score: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Check whether every letter has been used
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.hand.is_empty()
    }

    /// Apply one line of player input
    pub fn submit(&mut self, input: &str) -> HandEvent {
        if input == "." {
            return HandEvent::Quit { total: self.score };
        }

        let word = input.to_lowercase();
        if !is_valid_word(&word, &self.hand, self.repository) {
            debug!(%word, hand = %self.hand, "rejected word");
            return HandEvent::Rejected;
        }

        let next = match self.hand.update(&word) {
            Ok(next) => next,
            Err(err) => {
                warn!(%word, %err, "validated word could not be spent");
                return HandEvent::Rejected;
            }
        };

        let points = word_score(&word, self.hand_size);
        self.score += points;
        self.hand = next;
        debug!(%word, points, total = self.score, "accepted word");

        HandEvent::Accepted {
            word,
            points,
            total: self.score,
        }
    }
}

/// Play one hand interactively
///
/// End of input counts as typing ".".
///
/// # Errors
///
/// Returns an error if the console cannot be read or written.
pub fn play_hand<R: BufRead, W: Write>(
    hand: Hand,
    repository: &WordRepository,
    hand_size: usize,
    console: &mut Console<R, W>,
) -> io::Result<HandOutcome> {
    let mut round = HandRound::new(hand, repository, hand_size);

    while !round.is_exhausted() {
        console.say(format!("Current Hand:  {}", round.hand()))?;

        let event = match console.prompt(WORD_PROMPT)? {
            Some(input) => round.submit(&input),
            None => HandEvent::Quit {
                total: round.score(),
            },
        };

        match event {
            HandEvent::Quit { total } => {
                console.say(summary_line(&format!("Goodbye! Total score: {total}")))?;
                console.blank()?;
                return Ok(HandOutcome::Quit(total));
            }
            HandEvent::Rejected => {
                console.say("Invalid word, please try again.")?;
                console.blank()?;
            }
            HandEvent::Accepted {
                word,
                points,
                total,
            } => {
                console.say(format!(
                    "{word} earned {points} points. Total: {total} points"
                ))?;
                console.blank()?;
            }
        }
    }

    let total = round.score();
    console.say(summary_line(&format!(
        "Run out of letters. Total score: {total} points."
    )))?;
    console.blank()?;
    Ok(HandOutcome::Exhausted(total))
}

/// Session menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    New,
    Replay,
    End,
}

impl MenuCommand {
    /// Parse a menu choice; only the exact letters `n`, `r` and `e` count
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "n" => Some(Self::New),
            "r" => Some(Self::Replay),
            "e" => Some(Self::End),
            _ => None,
        }
    }
}

/// A sequence of Anagram hands sharing one word repository
pub struct AnagramSession<'a> {
    repository: &'a WordRepository,
    config: AnagramConfig,
    last_hand: Option<Hand>,
}

impl<'a> AnagramSession<'a> {
    #[must_use]
    pub const fn new(repository: &'a WordRepository, config: AnagramConfig) -> Self {
        Self {
            repository,
            config,
            last_hand: None,
        }
    }

    /// The most recently dealt hand, as it was dealt
    #[must_use]
    pub const fn last_hand(&self) -> Option<&Hand> {
        self.last_hand.as_ref()
    }

    /// Run the n/r/e menu until the player ends the game
    ///
    /// Returns the outcome of every hand played, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn play_game<Rn, R, W>(
        &mut self,
        console: &mut Console<R, W>,
        rng: &mut Rn,
    ) -> io::Result<Vec<HandOutcome>>
    where
        Rn: Rng + ?Sized,
        R: BufRead,
        W: Write,
    {
        let mut outcomes = Vec::new();

        while let Some(choice) = console.prompt(MENU_PROMPT)? {
            let hand = match MenuCommand::parse(&choice) {
                Some(MenuCommand::New) => {
                    let hand = deal_hand(self.config.hand_size, rng);
                    debug!(%hand, "dealt new hand");
                    self.last_hand = Some(hand.clone());
                    hand
                }
                Some(MenuCommand::Replay) => {
                    if let Some(hand) = &self.last_hand {
                        debug!(%hand, "replaying hand");
                        hand.clone()
                    } else {
                        console.say(
                            "You have not played a hand yet. Please play a new hand first!",
                        )?;
                        console.blank()?;
                        continue;
                    }
                }
                Some(MenuCommand::End) => break,
                None => {
                    console.say("Invalid command.")?;
                    continue;
                }
            };

            let outcome = play_hand(hand, self.repository, self.config.hand_size, console)?;
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}

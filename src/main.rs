//! Word Games - CLI
//!
//! Console Anagram and Hangman games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use word_games::{
    commands::{
        AnagramConfig, AnagramSession, HangmanConfig, anagram::HAND_SIZE, hangman::MAX_GUESSES,
        play_hangman,
    },
    core::WordRepository,
    output::{Console, formatters::title_banner},
    wordlists::{ANAGRAM_WORDLIST, HANGMAN_WORDLIST, WordListFormat, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_games",
    about = "Console word games: Scrabble-scored Anagram and Hangman",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed the random number generator for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build words from a dealt hand of letters (default)
    Anagram {
        /// Word list with one word per line
        #[arg(short = 'w', long, default_value = ANAGRAM_WORDLIST)]
        wordlist: PathBuf,

        /// Letters dealt per hand
        #[arg(short = 'n', long, default_value_t = HAND_SIZE)]
        hand_size: usize,
    },

    /// Guess the secret word one letter at a time
    Hangman {
        /// Word list of whitespace-separated words
        #[arg(short = 'w', long, default_value = HANGMAN_WORDLIST)]
        wordlist: PathBuf,

        /// Wrong guesses allowed
        #[arg(short = 'g', long, default_value_t = MAX_GUESSES)]
        max_guesses: u32,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Anagram if no command given
    let command = cli.command.unwrap_or(Commands::Anagram {
        wordlist: PathBuf::from(ANAGRAM_WORDLIST),
        hand_size: HAND_SIZE,
    });

    match command {
        Commands::Anagram {
            wordlist,
            hand_size,
        } => run_anagram_command(&wordlist, AnagramConfig { hand_size }, &mut rng),
        Commands::Hangman {
            wordlist,
            max_guesses,
        } => run_hangman_command(&wordlist, HangmanConfig { max_guesses }, &mut rng),
    }
}

/// Log to stderr so game output on stdout stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_words(path: &Path, format: WordListFormat) -> Result<WordRepository> {
    println!("Loading word list from file...");
    let words = load_from_file(path, format)
        .with_context(|| format!("could not load word list {}", path.display()))?;
    println!("   {} words loaded.", words.len());
    println!();
    Ok(words)
}

fn run_anagram_command(wordlist: &Path, config: AnagramConfig, rng: &mut StdRng) -> Result<()> {
    let words = load_words(wordlist, WordListFormat::Lines)?;
    println!("{}\n", title_banner("Anagram"));

    let mut console = Console::stdio();
    let mut session = AnagramSession::new(&words, config);
    let outcomes = session.play_game(&mut console, rng)?;

    if !outcomes.is_empty() {
        let total: u32 = outcomes.iter().map(|o| o.score()).sum();
        println!(
            "\nPlayed {} {}, {} points in all.",
            outcomes.len(),
            if outcomes.len() == 1 { "hand" } else { "hands" },
            total.to_string().bright_cyan().bold()
        );
    }
    Ok(())
}

fn run_hangman_command(wordlist: &Path, config: HangmanConfig, rng: &mut StdRng) -> Result<()> {
    let words = load_words(wordlist, WordListFormat::Tokens)?;
    let secret = words
        .choose(rng)
        .with_context(|| format!("word list {} is empty", wordlist.display()))?;
    println!("{}\n", title_banner("Hangman"));

    let mut console = Console::stdio();
    play_hangman(secret, config, &mut console)?;
    Ok(())
}

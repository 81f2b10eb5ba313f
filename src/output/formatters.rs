//! Formatting utilities for terminal output

use colored::Colorize;

/// Separator printed between Hangman rounds
pub const ROUND_SEPARATOR: &str = "-------------";

/// Boxed title shown when a game starts
#[must_use]
pub fn title_banner(title: &str) -> String {
    let rule = "═".repeat(60);
    format!(
        "{}\n{}\n{}",
        rule.cyan(),
        format!("  {title}").bright_cyan().bold(),
        rule.cyan()
    )
}

/// Line shown when a player wins
#[must_use]
pub fn success_line(text: &str) -> String {
    text.bright_green().bold().to_string()
}

/// Line shown when a player loses
#[must_use]
pub fn failure_line(text: &str) -> String {
    text.red().bold().to_string()
}

/// Line shown when a hand or game ends without a win or a loss
#[must_use]
pub fn summary_line(text: &str) -> String {
    text.bright_yellow().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_lines_keep_text() {
        assert!(success_line("You won").contains("You won"));
        assert!(failure_line("You lost").contains("You lost"));
        assert!(summary_line("Total: 3").contains("Total: 3"));
    }

    #[test]
    fn banner_contains_title() {
        let banner = title_banner("Hangman");
        assert!(banner.contains("Hangman"));
        assert_eq!(banner.lines().count(), 3);
    }
}

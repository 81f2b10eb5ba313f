//! Line-oriented terminal I/O
//!
//! The game loops talk to a `Console` instead of stdin/stdout directly so
//! they can be driven from in-memory buffers.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// A prompt-and-print terminal
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line of input
    ///
    /// The line is trimmed. Returns `None` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the line fails.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(input.trim().to_string()))
    }

    /// Print a line
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, line: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Print an empty line
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

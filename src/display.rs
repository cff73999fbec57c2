//! Display trait for exploration output
//!
//! All player-visible text goes through this trait, whether to a real
//! terminal or to the in-memory buffer used by tests.

use std::fmt;
use std::io::{self, Write};

/// Output operations the navigator needs.
pub trait QuestDisplay {
    /// Print text without a trailing newline (used for the choice prompt).
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Print one full line.
    fn print_line(&mut self, text: &str) -> Result<(), DisplayError> {
        self.print(text)?;
        self.print("\n")
    }
}

/// Display error type
#[derive(Debug, Clone)]
pub struct DisplayError {
    pub message: String,
}

impl DisplayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Display error: {}", self.message)
    }
}

impl std::error::Error for DisplayError {}

impl From<io::Error> for DisplayError {
    fn from(error: io::Error) -> Self {
        Self::new(format!("I/O error: {}", error))
    }
}

/// Plain stdout display for interactive play.
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        TerminalDisplay
    }
}

impl QuestDisplay for TerminalDisplay {
    /// Flushes after every write so the choice prompt, which has no
    /// trailing newline, is visible before the blocking read.
    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        let mut stdout = io::stdout();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

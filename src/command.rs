//! Navigation command grammar
//!
//! One raw input line maps to at most one command. The first non-whitespace
//! character decides, case-insensitively: `e` goes left, `d` goes right,
//! `s` stops the exploration. Everything else is an error the navigator
//! recovers from by re-prompting.

/// A single normalized navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Quit,
}

/// Why a line of input is not a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Empty line, or nothing but whitespace.
    Blank,
    /// First significant character is not one of `e`/`d`/`s`.
    Unknown(char),
}

impl Command {
    /// Parse one raw input line into a command.
    ///
    /// Leading whitespace and line endings are skipped; `"E"`, `"e"`,
    /// `"  e"` and `"E\n"` are all the left-move command.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let first = line
            .chars()
            .find(|c| !c.is_whitespace())
            .ok_or(CommandError::Blank)?;
        match first.to_ascii_lowercase() {
            'e' => Ok(Command::Left),
            'd' => Ok(Command::Right),
            's' => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other)),
        }
    }
}

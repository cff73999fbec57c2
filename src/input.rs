//! Line input sources for the navigator
//!
//! The navigator pulls raw lines from a `CommandSource` instead of touching
//! stdin directly, so tests can feed it a pre-recorded finite sequence.

use log::debug;
use std::collections::VecDeque;
use std::io;

/// A pull-based source of raw input lines.
pub trait CommandSource {
    /// Read the next line, without its trailing newline.
    ///
    /// Returns `Ok(None)` once the source is exhausted (end of input); the
    /// navigator treats that as an implicit quit rather than re-prompting
    /// forever.
    fn read_line(&mut self) -> Result<Option<String>, String>;
}

/// Blocking line input from stdin.
pub struct StdinInput {
    /// Reused between reads
    buffer: String,
}

impl StdinInput {
    pub fn new() -> Self {
        StdinInput {
            buffer: String::new(),
        }
    }
}

impl CommandSource for StdinInput {
    /// Block until a full line is available.
    ///
    /// A zero-byte read means stdin is closed or a pipe is exhausted;
    /// without that check a piped session (`printf 'e\ne\n' | gumshoe`)
    /// would spin on empty input instead of ending the exploration.
    fn read_line(&mut self) -> Result<Option<String>, String> {
        self.buffer.clear();
        let bytes_read = io::stdin()
            .read_line(&mut self.buffer)
            .map_err(|e| format!("failed to read line: {e}"))?;

        if bytes_read == 0 {
            debug!("stdin exhausted (EOF)");
            return Ok(None);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        debug!("input received: '{}'", self.buffer);
        Ok(Some(self.buffer.clone()))
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

/// A finite, pre-recorded sequence of input lines, for tests.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        ScriptedInput {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CommandSource for ScriptedInput {
    fn read_line(&mut self) -> Result<Option<String>, String> {
        Ok(self.lines.pop_front())
    }
}

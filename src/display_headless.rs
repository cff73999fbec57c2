//! Headless display implementation for testing
//!
//! Collects all output in memory instead of writing it to a terminal, so
//! tests can assert on exactly what the player would have seen.

use crate::display::{DisplayError, QuestDisplay};
use log::debug;

#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    buffer: Vec<String>,
    current_line: String,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed lines so far (the unterminated prompt line is not included).
    pub fn get_buffer(&self) -> &[String] {
        &self.buffer
    }

    /// All output as a single string, including any unterminated line.
    pub fn get_output(&self) -> String {
        let mut output = self.buffer.join("\n");
        if !self.current_line.is_empty() {
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&self.current_line);
        }
        output
    }

    fn flush_line(&mut self) {
        self.buffer.push(std::mem::take(&mut self.current_line));
    }
}

impl QuestDisplay for HeadlessDisplay {
    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        debug!("Headless: print({:?})", text);
        let mut parts = text.split('\n');
        // first part continues the current line; each '\n' completes one
        if let Some(first) = parts.next() {
            self.current_line.push_str(first);
        }
        for part in parts {
            self.flush_line();
            self.current_line.push_str(part);
        }
        Ok(())
    }
}

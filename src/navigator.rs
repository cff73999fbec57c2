//! Interactive exploration of the mansion
//!
//! The navigator walks the room tree under player control: show the current
//! room, offer the available passages, read one command, move or stop. It
//! records every room entered and prints the full path when the session
//! ends.

use crate::command::{Command, CommandError};
use crate::display::{DisplayError, QuestDisplay};
use crate::input::CommandSource;
use crate::room::Room;
use log::{debug, warn};

/// Why an exploration session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The player entered a room with no passages.
    ReachedLeaf,
    /// The player chose to stop (or input ran out).
    PlayerQuit,
    /// There was no map to explore.
    EmptyMap,
}

/// Outcome of one session: why it ended, and every room entered in order.
#[derive(Debug)]
pub struct Exploration<'a> {
    pub reason: ExitReason,
    pub path: Vec<&'a str>,
}

/// Outcome of one prompt at a branch room.
enum Move<'a> {
    To(&'a Room),
    Quit,
    EndOfInput,
}

pub struct Navigator<'io> {
    input: &'io mut dyn CommandSource,
    display: &'io mut dyn QuestDisplay,
}

impl<'io> Navigator<'io> {
    pub fn new(
        input: &'io mut dyn CommandSource,
        display: &'io mut dyn QuestDisplay,
    ) -> Self {
        Navigator { input, display }
    }

    /// Run one exploration session from the given entrance.
    ///
    /// Returns the exit reason together with the visited-room history; the
    /// history borrows names from the tree and holds one entry per room
    /// actually entered, no matter how many retries happened inside it.
    pub fn explore<'a>(&mut self, root: Option<&'a Room>) -> Result<Exploration<'a>, DisplayError> {
        let mut path: Vec<&'a str> = Vec::new();

        let Some(root) = root else {
            self.display.print_line("Empty map. Nothing to explore.")?;
            return Ok(Exploration {
                reason: ExitReason::EmptyMap,
                path,
            });
        };

        let mut current = root;
        let reason = loop {
            path.push(current.name());
            self.display
                .print_line(&format!("\nYou are in: {}", current.name()))?;

            if current.is_leaf() {
                self.display
                    .print_line("This room has no passages. You have reached a dead end.")?;
                break ExitReason::ReachedLeaf;
            }

            self.show_choices(current)?;
            match self.next_move(current)? {
                Move::To(next) => {
                    debug!("Moving from '{}' to '{}'", current.name(), next.name());
                    current = next;
                }
                Move::Quit => {
                    self.display.print_line("Exploration ended by the player.")?;
                    break ExitReason::PlayerQuit;
                }
                Move::EndOfInput => {
                    // Exhausted input ends the session instead of
                    // re-prompting forever.
                    self.display
                        .print_line("No more input. Exploration ends here.")?;
                    break ExitReason::PlayerQuit;
                }
            }
        };

        self.print_path(&path)?;
        Ok(Exploration { reason, path })
    }

    /// List the passages out of a branch room.
    fn show_choices(&mut self, room: &Room) -> Result<(), DisplayError> {
        self.display.print_line("Available choices:")?;
        if let Some(left) = room.left() {
            self.display
                .print_line(&format!("  (e) - Go left  -> {}", left.name()))?;
        }
        if let Some(right) = room.right() {
            self.display
                .print_line(&format!("  (d) - Go right -> {}", right.name()))?;
        }
        self.display.print_line("  (s) - Stop exploring")?;
        Ok(())
    }

    /// Prompt until the player makes a legal move, quits, or input runs out.
    ///
    /// Invalid input and moves into missing passages are reported and
    /// retried here, at the same room.
    fn next_move<'a>(&mut self, room: &'a Room) -> Result<Move<'a>, DisplayError> {
        loop {
            self.display.print("Your choice (e/d/s): ")?;

            let line = match self.input.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(Move::EndOfInput),
                Err(e) => {
                    warn!("Unreadable input line: {e}");
                    self.display.print_line("Invalid input. Try again.")?;
                    continue;
                }
            };

            match Command::parse(&line) {
                Ok(Command::Left) => match room.left() {
                    Some(next) => return Ok(Move::To(next)),
                    None => self.display.print_line(
                        "There is no passage to the left of this room. Try another option.",
                    )?,
                },
                Ok(Command::Right) => match room.right() {
                    Some(next) => return Ok(Move::To(next)),
                    None => self.display.print_line(
                        "There is no passage to the right of this room. Try another option.",
                    )?,
                },
                Ok(Command::Quit) => return Ok(Move::Quit),
                Err(CommandError::Blank) => {
                    self.display.print_line("Invalid input. Try again.")?;
                }
                Err(CommandError::Unknown(c)) => {
                    self.display
                        .print_line(&format!("Unknown option '{c}'. Use 'e', 'd' or 's'."))?;
                }
            }
        }
    }

    /// Print the visited rooms, 1-indexed, if any were entered.
    fn print_path(&mut self, path: &[&str]) -> Result<(), DisplayError> {
        if path.is_empty() {
            return Ok(());
        }
        self.display.print_line("\n--- Path taken ---")?;
        for (i, name) in path.iter().enumerate() {
            self.display.print_line(&format!("{}. {}", i + 1, name))?;
        }
        self.display.print_line("------------------")?;
        Ok(())
    }
}

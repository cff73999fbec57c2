//! Room nodes for the mansion map
//!
//! The mansion is a strict binary tree: every room exclusively owns its
//! children, so shared rooms and cycles are unrepresentable.

use log::debug;

/// A single room in the mansion, with up to two onward passages.
pub struct Room {
    name: String,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// Create a room with the given name and no passages.
    ///
    /// The name must contain at least one non-whitespace character; a blank
    /// name is rejected without creating anything.
    pub fn new(name: &str) -> Result<Room, String> {
        if name.trim().is_empty() {
            return Err("room name must not be blank".to_string());
        }
        debug!("Creating room '{}'", name);
        Ok(Room {
            name: name.to_string(),
            left: None,
            right: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn left(&self) -> Option<&Room> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Room> {
        self.right.as_deref()
    }

    /// Attach an owned room behind the left passage, replacing any previous one.
    pub fn set_left(&mut self, room: Room) {
        self.left = Some(Box::new(room));
    }

    /// Attach an owned room behind the right passage, replacing any previous one.
    pub fn set_right(&mut self, room: Room) {
        self.right = Some(Box::new(room));
    }

    /// A room with no passages at all ends an exploration.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of rooms in this subtree, including this one.
    pub fn room_count(&self) -> usize {
        1 + self.left.as_deref().map_or(0, Room::room_count)
            + self.right.as_deref().map_or(0, Room::room_count)
    }
}

impl Drop for Room {
    /// Release the subtree without one recursive drop call per tree level.
    ///
    /// Detaching each child onto an explicit stack before it drops keeps
    /// teardown flat, so even a degenerate chain-shaped map cannot overflow
    /// the call stack. Every room and its name are freed exactly once by
    /// ownership.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Some(left) = self.left.take() {
            stack.push(left);
        }
        if let Some(right) = self.right.take() {
            stack.push(right);
        }
        while let Some(mut room) = stack.pop() {
            if let Some(left) = room.left.take() {
                stack.push(left);
            }
            if let Some(right) = room.right.take() {
                stack.push(right);
            }
            // room drops here with both children already detached
        }
    }
}

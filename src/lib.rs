//! Gumshoe - interactive exploration of a fixed mansion map
//!
//! The mansion is a binary tree of rooms. A session starts at the entrance
//! and follows left/right passages under player control until a dead-end
//! room is reached or the player quits; the path taken is printed at the
//! end.

pub mod command;
pub mod display;
pub mod display_headless;
pub mod input;
pub mod mansion;
pub mod navigator;
pub mod room;

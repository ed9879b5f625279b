//! Integration tests for the pixelzork_engine crate.
//!
//! Tests for the game session against the house:
//! - Command narration
//! - Use rules and the cellar door
//! - Properties that hold for any command sequence

mod commands;
mod properties;

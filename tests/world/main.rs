//! Integration tests for the pixelzork_world crate.
//!
//! Tests for the room graph:
//! - Definition validation
//! - Persistent world state

mod world_state;

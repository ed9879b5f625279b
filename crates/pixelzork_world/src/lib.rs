//! Room graph, item placement, and lock state for Pixel Zork.
//!
//! This crate provides:
//! - [`WorldDefinition`] - The static description a world is built from
//! - [`World`] - Persistent world state with O(1) cloning

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod definition;
pub mod world;

pub use definition::{RoomDefinition, WorldDefinition};
pub use world::{RoomView, World};

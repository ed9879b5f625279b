//! Game state, actions, and puzzle rules for Pixel Zork.
//!
//! This crate provides:
//! - [`Game`] - One play session: parse, dispatch, narrate
//! - [`GameState`] - Location, inventory, and move count
//! - [`RuleBook`] - Data-driven `use` interactions
//! - [`Outcome`] - Narration lines plus a status snapshot
//! - [`stdlib`] - The standard "house" adventure

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod actions;
pub mod config;
pub mod game;
pub mod narration;
pub mod rules;
pub mod state;
pub mod stdlib;

pub use config::{EngineConfig, WinCondition, WinPolicy};
pub use game::Game;
pub use narration::{Line, LineKind, Narrator, Outcome, Status};
pub use rules::{Effect, Precondition, RuleBook, UseRule};
pub use state::GameState;

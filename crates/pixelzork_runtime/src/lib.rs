//! REPL, CLI, and world files for Pixel Zork.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop over a [`Game`](pixelzork_engine::Game)
//! - [`WorldFile`] - JSON world definitions with their rules and win condition
//! - [`Renderer`] - Terminal styling for narration lines

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod loader;
pub mod render;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use loader::WorldFile;
pub use render::Renderer;
pub use repl::Repl;

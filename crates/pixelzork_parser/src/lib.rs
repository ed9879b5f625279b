//! Verb and direction parser for Pixel Zork commands.
//!
//! This crate transforms player input like "take small key" or "n" into
//! [`Command`] values the engine dispatches on.
//!
//! # Architecture
//!
//! ```text
//! "  Go North. "
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["go", "north."]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → Verb::Go, argument "north."
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ COMMAND         │  → Command::Go(Heading::Known(North))
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to token stream
//! - [`vocabulary`] - Verb and direction word tables
//! - [`command`] - Parsed command representation
//! - [`parser`] - Main parser pipeline
//! - [`stdlib`] - Standard vocabulary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod parser;
pub mod stdlib;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use command::{Command, Heading};
pub use parser::{CommandParser, ParseError, ParseResult, ParsedCommand};
pub use vocabulary::{ArgumentRule, Verb, VocabularyRegistry};

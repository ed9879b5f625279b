//! Pixel Zork - a tiny text adventure engine
//!
//! This crate re-exports all layers of the Pixel Zork system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: pixelzork_runtime    - REPL, CLI, JSON world files
//! Layer 3: pixelzork_engine     - Game session, actions, use rules, the house
//! Layer 2: pixelzork_parser     - Tokenizer, vocabulary, command parser
//! Layer 1: pixelzork_world      - Room graph, items, locks
//! Layer 0: pixelzork_foundation - Core types (RoomId, Direction, Error)
//! ```

pub use pixelzork_engine as engine;
pub use pixelzork_foundation as foundation;
pub use pixelzork_parser as parser;
pub use pixelzork_runtime as runtime;
pub use pixelzork_world as world;

//! Core identifiers, directions, and error types for Pixel Zork.
//!
//! This crate provides:
//! - [`Direction`] - The closed set of exit directions
//! - [`RoomId`] - Room identifiers
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod error;
pub mod room_id;

pub use direction::Direction;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use room_id::RoomId;

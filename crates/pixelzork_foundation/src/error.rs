//! Error types for Pixel Zork.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Player mistakes (unknown verbs, missing items, locked doors) are never
//! errors; they are narration. The errors here describe malformed world
//! definitions and failures of the surrounding runtime.

use std::fmt;

use thiserror::Error;

use crate::direction::Direction;
use crate::room_id::RoomId;

/// Result type used across the Pixel Zork crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Pixel Zork operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a room not found error.
    #[must_use]
    pub fn room_not_found(id: RoomId) -> Self {
        Self::new(ErrorKind::RoomNotFound(id))
    }

    /// Creates a dangling exit error.
    #[must_use]
    pub fn dangling_exit(room: RoomId, direction: Direction, target: RoomId) -> Self {
        Self::new(ErrorKind::DanglingExit {
            room,
            direction,
            target,
        })
    }

    /// Creates a lock-without-exit error.
    #[must_use]
    pub fn lock_without_exit(room: RoomId, direction: Direction) -> Self {
        Self::new(ErrorKind::LockWithoutExit { room, direction })
    }

    /// Creates a missing start room error.
    #[must_use]
    pub fn missing_start_room(id: RoomId) -> Self {
        Self::new(ErrorKind::MissingStartRoom(id))
    }

    /// Creates a duplicate item error.
    #[must_use]
    pub fn duplicate_item(item: impl Into<String>, first: RoomId, second: RoomId) -> Self {
        Self::new(ErrorKind::DuplicateItem {
            item: item.into(),
            first,
            second,
        })
    }

    /// Returns true if this error reports a lookup against an unknown id.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::RoomNotFound(_))
    }

    /// Returns true if this error reports a malformed world definition.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::DanglingExit { .. }
                | ErrorKind::LockWithoutExit { .. }
                | ErrorKind::MissingStartRoom(_)
                | ErrorKind::DuplicateItem { .. }
                | ErrorKind::InvalidDefinition(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A lookup or mutation named a room that does not exist.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// An exit points at a room that does not exist.
    #[error("exit {direction} from {room} leads to unknown room {target}")]
    DanglingExit {
        /// The room declaring the exit.
        room: RoomId,
        /// The exit direction.
        direction: Direction,
        /// The missing destination.
        target: RoomId,
    },

    /// A lock flag was declared for a direction with no exit.
    #[error("room {room} locks {direction} but has no exit that way")]
    LockWithoutExit {
        /// The room declaring the lock.
        room: RoomId,
        /// The direction without an exit.
        direction: Direction,
    },

    /// The designated start room does not exist.
    #[error("start room not found: {0}")]
    MissingStartRoom(RoomId),

    /// The same item was placed in more than one location.
    #[error("item '{item}' placed in both {first} and {second}")]
    DuplicateItem {
        /// The item name.
        item: String,
        /// The first room holding the item.
        first: RoomId,
        /// The second room holding the item.
        second: RoomId,
    },

    /// Any other structural problem in a world definition.
    #[error("invalid world definition: {0}")]
    InvalidDefinition(String),

    /// I/O error (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Line editor error.
    #[error("editor error: {0}")]
    Editor(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or command that triggered the error.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Stack of operations in progress.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

//! Parsed commands.
//!
//! A [`Command`] is the closed set of things a player can ask for. The
//! engine matches on it exhaustively.

use std::fmt;

use pixelzork_foundation::Direction;

/// Where a `go` command is headed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Heading {
    /// A recognised direction.
    Known(Direction),
    /// A word that is not a direction, e.g. "go banana".
    Unknown(String),
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(direction) => write!(f, "{direction}"),
            Self::Unknown(word) => f.write_str(word),
        }
    }
}

/// A parsed command ready for dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move through an exit.
    Go(Heading),
    /// Describe the current room.
    Look,
    /// Pick up an item by name.
    Take(String),
    /// Put down an item by name.
    Drop(String),
    /// List held items.
    Inventory,
    /// Use a held item. The name may be empty.
    Use(String),
    /// List commands.
    Help,
    /// Start over.
    Restart,
}

impl Command {
    /// Returns true if this command can change game state when it succeeds.
    #[must_use]
    pub fn is_state_changing(&self) -> bool {
        matches!(
            self,
            Self::Go(_) | Self::Take(_) | Self::Drop(_) | Self::Use(_)
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Go(heading) => write!(f, "go {heading}"),
            Self::Look => f.write_str("look"),
            Self::Take(item) => write!(f, "take {item}"),
            Self::Drop(item) => write!(f, "drop {item}"),
            Self::Inventory => f.write_str("inventory"),
            Self::Use(item) if item.is_empty() => f.write_str("use"),
            Self::Use(item) => write!(f, "use {item}"),
            Self::Help => f.write_str("help"),
            Self::Restart => f.write_str("restart"),
        }
    }
}

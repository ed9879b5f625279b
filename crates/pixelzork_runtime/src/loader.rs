//! World files in JSON.
//!
//! A world file carries everything a session needs besides presentation:
//!
//! ```json
//! {
//!   "start": "porch",
//!   "rooms": {
//!     "porch": {
//!       "name": "Porch",
//!       "description": "A creaky porch.",
//!       "exits": { "north": "parlour" },
//!       "items": ["doormat"],
//!       "locked": { "north": true }
//!     },
//!     "parlour": { "name": "Parlour", "description": "Velvet.", "exits": { "south": "porch" } }
//!   },
//!   "rules": [],
//!   "win": { "item": "doormat", "message": "You win!" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use pixelzork_engine::stdlib::{house_config, house_rules, house_world};
use pixelzork_engine::{EngineConfig, Game, RuleBook, WinCondition};
use pixelzork_foundation::{Error, ErrorContext, ErrorKind, Result, RoomId};
use pixelzork_world::{RoomDefinition, WorldDefinition};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A world definition bundled with its puzzle rules and win condition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldFile {
    /// Room the player starts in.
    pub start: RoomId,
    /// All rooms by id.
    pub rooms: BTreeMap<RoomId, RoomDefinition>,
    /// Use interactions.
    #[serde(default)]
    pub rules: RuleBook,
    /// Taking this item wins.
    #[serde(default)]
    pub win: Option<WinCondition>,
}

impl WorldFile {
    /// The built-in house as a world file.
    #[must_use]
    pub fn house() -> Self {
        let definition = house_world();
        Self {
            start: definition.start,
            rooms: definition.rooms,
            rules: house_rules(),
            win: house_config().win,
        }
    }

    /// Parses a world file from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a `Serialization` error if the text is not a valid world file.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
    }

    /// Writes the world file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a `Serialization` error if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
    }

    /// Reads and parses a world file.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the file cannot be read, or a
    /// `Serialization` error if it is malformed. Both carry the path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let context = ErrorContext::new()
            .with_source(path.display().to_string())
            .with_frame("loading world file");

        let json = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::Io(format!(
                "failed to read '{}': {e}",
                path.display()
            )))
            .with_context(context.clone())
        })?;

        let file = Self::from_json(&json).map_err(|e| e.with_context(context))?;
        debug!(path = %path.display(), rooms = file.rooms.len(), "loaded world file");
        Ok(file)
    }

    /// Splits off the world definition.
    #[must_use]
    pub fn definition(&self) -> WorldDefinition {
        WorldDefinition {
            start: self.start.clone(),
            rooms: self.rooms.clone(),
        }
    }

    /// Starts a session in this world.
    ///
    /// The file's win condition replaces whatever `config` had.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the world or a rule is malformed.
    pub fn into_game(self, config: EngineConfig) -> Result<Game> {
        let definition = WorldDefinition {
            start: self.start,
            rooms: self.rooms,
        };
        Game::new(definition, self.rules, config.with_win(self.win))
    }
}

//! Static world definitions.
//!
//! A [`WorldDefinition`] is the configuration payload a [`World`](crate::World)
//! is built from: every room's text, exits, initial items, and initial lock
//! flags. It never changes during play; restarting a session rebuilds the
//! mutable state from it.

use std::collections::{BTreeMap, HashMap};

use pixelzork_foundation::{Direction, Error, ErrorKind, Result, RoomId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The static description of one room.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoomDefinition {
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Exits by direction.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exits: BTreeMap<Direction, RoomId>,
    /// Items initially present, in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<String>,
    /// Initial lock flags. Absent directions are unlocked.
    #[cfg_attr(feature = "serde", serde(default))]
    pub locked: BTreeMap<Direction, bool>,
}

impl RoomDefinition {
    /// Creates a room with no exits or items.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            locked: BTreeMap::new(),
        }
    }

    /// Adds an exit.
    #[must_use]
    pub fn with_exit(mut self, direction: Direction, target: impl Into<RoomId>) -> Self {
        self.exits.insert(direction, target.into());
        self
    }

    /// Adds an item.
    #[must_use]
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Marks an exit as initially locked.
    #[must_use]
    pub fn with_locked(mut self, direction: Direction) -> Self {
        self.locked.insert(direction, true);
        self
    }
}

/// The static description of a whole world.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldDefinition {
    /// Room the player starts in.
    pub start: RoomId,
    /// All rooms by id.
    pub rooms: BTreeMap<RoomId, RoomDefinition>,
}

impl WorldDefinition {
    /// Creates an empty definition starting in `start`.
    ///
    /// The start room still has to be added with [`with_room`](Self::with_room).
    #[must_use]
    pub fn new(start: impl Into<RoomId>) -> Self {
        Self {
            start: start.into(),
            rooms: BTreeMap::new(),
        }
    }

    /// Adds a room.
    #[must_use]
    pub fn with_room(mut self, id: impl Into<RoomId>, room: RoomDefinition) -> Self {
        self.rooms.insert(id.into(), room);
        self
    }

    /// Looks up a room definition.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if no room has this id.
    pub fn room(&self, id: &RoomId) -> Result<&RoomDefinition> {
        self.rooms
            .get(id)
            .ok_or_else(|| Error::room_not_found(id.clone()))
    }

    /// Checks the structural invariants of the definition.
    ///
    /// - the start room exists
    /// - every exit leads to an existing room
    /// - every lock flag belongs to an existing exit
    /// - every item is placed exactly once
    /// - every item name is lowercase and single-spaced, as the parser produces
    ///
    /// # Errors
    ///
    /// Returns the first configuration error found.
    pub fn validate(&self) -> Result<()> {
        if !self.rooms.contains_key(&self.start) {
            return Err(Error::missing_start_room(self.start.clone()));
        }

        let mut placed: HashMap<&str, &RoomId> = HashMap::new();

        for (id, room) in &self.rooms {
            for (direction, target) in &room.exits {
                if !self.rooms.contains_key(target) {
                    return Err(Error::dangling_exit(id.clone(), *direction, target.clone()));
                }
            }

            for direction in room.locked.keys() {
                if !room.exits.contains_key(direction) {
                    return Err(Error::lock_without_exit(id.clone(), *direction));
                }
            }

            for item in &room.items {
                if !is_canonical_item_name(item) {
                    return Err(Error::new(ErrorKind::InvalidDefinition(format!(
                        "item name '{item}' in {id} must be lowercase and single-spaced"
                    ))));
                }
                if let Some(first) = placed.insert(item.as_str(), id) {
                    return Err(Error::duplicate_item(item.clone(), first.clone(), id.clone()));
                }
            }
        }

        Ok(())
    }
}

/// True if `name` could come out of the parser unchanged.
fn is_canonical_item_name(name: &str) -> bool {
    !name.is_empty()
        && name.split(' ').all(|word| !word.is_empty())
        && !name.chars().any(|c| c.is_uppercase() || (c.is_whitespace() && c != ' '))
}

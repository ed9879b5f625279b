//! World state management with immutable snapshots.
//!
//! The `World` pairs a shared, validated [`WorldDefinition`] with the
//! per-room state that changes during play: which items lie where and which
//! exits are locked. It uses persistent data structures for O(1) cloning and
//! structural sharing; every mutation returns a new `World`.

use std::sync::Arc;

use pixelzork_foundation::{Direction, Error, Result, RoomId};

use crate::definition::{RoomDefinition, WorldDefinition};

/// Mutable per-room state.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RoomContents {
    /// Items currently present, in display order.
    items: im::Vector<String>,
    /// Current lock flags. Absent directions are unlocked.
    locked: im::OrdMap<Direction, bool>,
}

impl RoomContents {
    fn from_definition(room: &RoomDefinition) -> Self {
        Self {
            items: room.items.iter().cloned().collect(),
            locked: room.locked.iter().map(|(d, l)| (*d, *l)).collect(),
        }
    }
}

/// Immutable snapshot of the world.
///
/// Clone is O(1) due to structural sharing.
/// All mutation methods return a new `World` instance.
#[derive(Clone, Debug)]
pub struct World {
    /// The static definition this world was built from.
    definition: Arc<WorldDefinition>,
    /// Mutable state for every room.
    rooms: im::OrdMap<RoomId, RoomContents>,
}

impl World {
    /// Builds a world from a definition, validating it first.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the definition is malformed.
    pub fn from_definition(definition: WorldDefinition) -> Result<Self> {
        Self::from_shared(Arc::new(definition))
    }

    /// Builds a world from a shared definition, validating it first.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the definition is malformed.
    pub fn from_shared(definition: Arc<WorldDefinition>) -> Result<Self> {
        definition.validate()?;
        Ok(Self::initial(definition))
    }

    /// Builds the initial state of an already validated definition.
    fn initial(definition: Arc<WorldDefinition>) -> Self {
        let rooms = definition
            .rooms
            .iter()
            .map(|(id, room)| (id.clone(), RoomContents::from_definition(room)))
            .collect();
        Self { definition, rooms }
    }

    /// Returns the static definition.
    #[must_use]
    pub fn definition(&self) -> &WorldDefinition {
        &self.definition
    }

    /// Returns the room the player starts in.
    #[must_use]
    pub fn start_room(&self) -> &RoomId {
        &self.definition.start
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Returns a read-only view of a room.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if no room has this id.
    pub fn room(&self, id: &RoomId) -> Result<RoomView<'_>> {
        let (id, _) = self
            .definition
            .rooms
            .get_key_value(id)
            .ok_or_else(|| Error::room_not_found(id.clone()))?;
        let (definition, contents) = self.lookup(id)?;
        Ok(RoomView {
            id,
            definition,
            contents,
        })
    }

    /// Iterates over all rooms in id order.
    pub fn rooms(&self) -> impl Iterator<Item = RoomView<'_>> + '_ {
        self.definition.rooms.iter().filter_map(|(id, definition)| {
            self.rooms.get(id).map(|contents| RoomView {
                id,
                definition,
                contents,
            })
        })
    }

    /// Returns the destination of the exit `direction` from `room`, if any.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if `room` does not exist.
    pub fn exit(&self, room: &RoomId, direction: Direction) -> Result<Option<&RoomId>> {
        Ok(self.definition.room(room)?.exits.get(&direction))
    }

    /// Returns true if the exit `direction` from `room` is locked.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if `room` does not exist.
    pub fn is_locked(&self, room: &RoomId, direction: Direction) -> Result<bool> {
        let (_, contents) = self.lookup(room)?;
        Ok(contents.locked.get(&direction).copied().unwrap_or(false))
    }

    /// Returns the items currently in `room`, in display order.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if `room` does not exist.
    pub fn items(&self, room: &RoomId) -> Result<Vec<String>> {
        let (_, contents) = self.lookup(room)?;
        Ok(contents.items.iter().cloned().collect())
    }

    /// Returns true if `item` is currently in `room`.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if `room` does not exist.
    pub fn contains_item(&self, room: &RoomId, item: &str) -> Result<bool> {
        let (_, contents) = self.lookup(room)?;
        Ok(contents.items.iter().any(|i| i == item))
    }

    /// Finds the room currently holding `item`.
    #[must_use]
    pub fn locate_item(&self, item: &str) -> Option<&RoomId> {
        self.rooms
            .iter()
            .find(|(_, contents)| contents.items.iter().any(|i| i == item))
            .map(|(id, _)| id)
    }

    /// Removes `item` from `room`.
    ///
    /// Returns `None` if the item is not there.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if `room` does not exist.
    pub fn remove_item(&self, room: &RoomId, item: &str) -> Result<Option<World>> {
        let (_, contents) = self.lookup(room)?;
        let Some(index) = contents.items.iter().position(|i| i == item) else {
            return Ok(None);
        };

        let mut contents = contents.clone();
        contents.items.remove(index);
        Ok(Some(self.with_contents(room, contents)))
    }

    /// Appends `item` to `room`.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if `room` does not exist.
    pub fn add_item(&self, room: &RoomId, item: impl Into<String>) -> Result<World> {
        let (_, contents) = self.lookup(room)?;
        let mut contents = contents.clone();
        contents.items.push_back(item.into());
        Ok(self.with_contents(room, contents))
    }

    /// Sets the lock flag of the exit `direction` from `room`.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if `room` does not exist.
    pub fn set_locked(&self, room: &RoomId, direction: Direction, locked: bool) -> Result<World> {
        let (_, contents) = self.lookup(room)?;
        let mut contents = contents.clone();
        contents.locked.insert(direction, locked);
        Ok(self.with_contents(room, contents))
    }

    /// Returns a world with every room restored to its defined state.
    #[must_use]
    pub fn reset(&self) -> World {
        Self::initial(Arc::clone(&self.definition))
    }

    fn lookup(&self, id: &RoomId) -> Result<(&RoomDefinition, &RoomContents)> {
        let definition = self.definition.room(id)?;
        let contents = self
            .rooms
            .get(id)
            .ok_or_else(|| Error::room_not_found(id.clone()))?;
        Ok((definition, contents))
    }

    fn with_contents(&self, room: &RoomId, contents: RoomContents) -> World {
        Self {
            definition: Arc::clone(&self.definition),
            rooms: self.rooms.update(room.clone(), contents),
        }
    }
}

impl PartialEq for World {
    /// Worlds are equal when built from equal definitions and in equal state.
    fn eq(&self, other: &Self) -> bool {
        self.rooms == other.rooms && self.definition == other.definition
    }
}

/// Read-only view of one room: static text plus current contents.
#[derive(Clone, Copy, Debug)]
pub struct RoomView<'a> {
    id: &'a RoomId,
    definition: &'a RoomDefinition,
    contents: &'a RoomContents,
}

impl<'a> RoomView<'a> {
    /// The room id.
    #[must_use]
    pub fn id(&self) -> &'a RoomId {
        self.id
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.definition.name
    }

    /// The display description.
    #[must_use]
    pub fn description(&self) -> &'a str {
        &self.definition.description
    }

    /// Exits in direction order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, &'a RoomId)> + 'a {
        self.definition.exits.iter().map(|(d, id)| (*d, id))
    }

    /// Returns true if the exit `direction` is locked.
    #[must_use]
    pub fn is_locked(&self, direction: Direction) -> bool {
        self.contents.locked.get(&direction).copied().unwrap_or(false)
    }

    /// Items currently present, in display order.
    pub fn items(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.contents.items.iter().map(String::as_str)
    }

    /// Returns true if no items are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.items.is_empty()
    }
}

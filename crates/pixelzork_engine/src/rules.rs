//! Data-driven `use` interactions.
//!
//! Each [`UseRule`] binds an (item, room) pair to a precondition, an effect,
//! and the narration for both outcomes. New puzzles are added by adding
//! rules; the `use` action itself never names an item.

use pixelzork_foundation::{Direction, Error, ErrorKind, Result, RoomId};
use pixelzork_world::{World, WorldDefinition};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Condition on the current room checked before a rule's effect applies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Precondition {
    /// Always holds.
    Always,
    /// The exit in this direction is locked.
    ExitLocked(Direction),
    /// The exit in this direction is unlocked.
    ExitUnlocked(Direction),
}

impl Precondition {
    /// Checks the precondition against `room`.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if `room` does not exist.
    pub fn holds(&self, world: &World, room: &RoomId) -> Result<bool> {
        match self {
            Self::Always => Ok(true),
            Self::ExitLocked(direction) => world.is_locked(room, *direction),
            Self::ExitUnlocked(direction) => Ok(!world.is_locked(room, *direction)?),
        }
    }

    fn direction(&self) -> Option<Direction> {
        match self {
            Self::Always => None,
            Self::ExitLocked(d) | Self::ExitUnlocked(d) => Some(*d),
        }
    }
}

/// Change applied to the current room when a rule fires.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Effect {
    /// Narration only.
    Nothing,
    /// Clear the lock flag of an exit.
    Unlock(Direction),
    /// Set the lock flag of an exit.
    Lock(Direction),
}

impl Effect {
    /// Applies the effect to `room`.
    ///
    /// Returns the new world and whether anything actually changed.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if `room` does not exist.
    pub fn apply(&self, world: &World, room: &RoomId) -> Result<(World, bool)> {
        match self {
            Self::Nothing => Ok((world.clone(), false)),
            Self::Unlock(direction) => Self::set_lock(world, room, *direction, false),
            Self::Lock(direction) => Self::set_lock(world, room, *direction, true),
        }
    }

    fn set_lock(
        world: &World,
        room: &RoomId,
        direction: Direction,
        locked: bool,
    ) -> Result<(World, bool)> {
        let changed = world.is_locked(room, direction)? != locked;
        Ok((world.set_locked(room, direction, locked)?, changed))
    }

    fn direction(&self) -> Option<Direction> {
        match self {
            Self::Nothing => None,
            Self::Unlock(d) | Self::Lock(d) => Some(*d),
        }
    }
}

/// One interaction: using `item` in `room`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UseRule {
    /// Item being used.
    pub item: String,
    /// Room it must be used in.
    pub room: RoomId,
    /// Checked before the effect applies.
    pub precondition: Precondition,
    /// Applied when the precondition holds.
    pub effect: Effect,
    /// Narrated when the precondition holds.
    pub narration: String,
    /// Narrated when it does not. Falls back to the generic message.
    #[cfg_attr(feature = "serde", serde(default))]
    pub otherwise: Option<String>,
}

impl UseRule {
    /// Creates a rule that always holds and has no effect.
    #[must_use]
    pub fn new(
        item: impl Into<String>,
        room: impl Into<RoomId>,
        narration: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            room: room.into(),
            precondition: Precondition::Always,
            effect: Effect::Nothing,
            narration: narration.into(),
            otherwise: None,
        }
    }

    /// Sets the precondition.
    #[must_use]
    pub fn with_precondition(mut self, precondition: Precondition) -> Self {
        self.precondition = precondition;
        self
    }

    /// Sets the effect.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    /// Sets the narration for a failed precondition.
    #[must_use]
    pub fn otherwise(mut self, narration: impl Into<String>) -> Self {
        self.otherwise = Some(narration.into());
        self
    }

    /// Returns true if this rule covers using `item` in `room`.
    #[must_use]
    pub fn matches(&self, item: &str, room: &RoomId) -> bool {
        self.item == item && &self.room == room
    }
}

/// Ordered table of use rules. The first matching rule wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleBook {
    rules: Vec<UseRule>,
}

impl RuleBook {
    /// Creates an empty rule book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule after all existing ones.
    #[must_use]
    pub fn with_rule(mut self, rule: UseRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Finds the rule for using `item` in `room`.
    #[must_use]
    pub fn find(&self, item: &str, room: &RoomId) -> Option<&UseRule> {
        self.rules.iter().find(|r| r.matches(item, room))
    }

    /// Returns all rules in order.
    pub fn rules(&self) -> impl Iterator<Item = &UseRule> {
        self.rules.iter()
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Checks every rule against a world definition.
    ///
    /// A rule must name an existing room, and any direction it checks or
    /// changes must be an exit of that room.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` or `InvalidDefinition` for the first bad rule.
    pub fn validate(&self, definition: &WorldDefinition) -> Result<()> {
        for rule in &self.rules {
            let room = definition.room(&rule.room)?;
            for direction in [rule.precondition.direction(), rule.effect.direction()]
                .into_iter()
                .flatten()
            {
                if !room.exits.contains_key(&direction) {
                    return Err(Error::new(ErrorKind::InvalidDefinition(format!(
                        "rule for '{}' in {} refers to missing exit {direction}",
                        rule.item, rule.room
                    ))));
                }
            }
        }
        Ok(())
    }
}

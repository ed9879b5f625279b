//! Session state.
//!
//! [`GameState`] is everything about a session that is not part of the
//! world: where the player stands, what they carry, and how many moves they
//! have made. It is created once per session and replaced wholesale on
//! restart.

use pixelzork_foundation::RoomId;

/// Mutable state of one play session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Room the player occupies.
    current_room: RoomId,
    /// Held items in pickup order.
    inventory: Vec<String>,
    /// State-changing actions performed.
    moves: u64,
    /// Whether the win narration has fired.
    won: bool,
}

impl GameState {
    /// Creates the state at the start of a session.
    #[must_use]
    pub fn new(start: RoomId) -> Self {
        Self {
            current_room: start,
            inventory: Vec::new(),
            moves: 0,
            won: false,
        }
    }

    /// Returns the room the player occupies.
    #[must_use]
    pub fn current_room(&self) -> &RoomId {
        &self.current_room
    }

    /// Returns held items in pickup order.
    #[must_use]
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Returns the move counter.
    #[must_use]
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Returns true once the win narration has fired.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Returns true if the player holds `item`.
    #[must_use]
    pub fn holds(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    pub(crate) fn enter(&mut self, room: RoomId) {
        self.current_room = room;
    }

    pub(crate) fn pick_up(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Removes `item` from the inventory; false if it was not held.
    pub(crate) fn put_down(&mut self, item: &str) -> bool {
        match self.inventory.iter().position(|i| i == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn count_move(&mut self) {
        self.moves += 1;
    }

    pub(crate) fn mark_won(&mut self) {
        self.won = true;
    }
}

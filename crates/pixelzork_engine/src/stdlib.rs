//! The standard adventure: a dark old house with a gem in the cellar.
//!
//! ```text
//!                 roof
//!                  │ up/down
//!                attic
//!                  │ up/down
//! library ─── hallway ─── kitchen
//!                  │          ┆ north (locked)
//!                foyer      cellar
//! ```

use pixelzork_foundation::{Direction, Result};
use pixelzork_world::{RoomDefinition, WorldDefinition};

use crate::config::EngineConfig;
use crate::game::Game;
use crate::rules::{Effect, Precondition, RuleBook, UseRule};

/// Item that unlocks the cellar.
pub const KEY: &str = "small key";
/// Item whose pickup wins the game.
pub const GEM: &str = "glowing gem";
/// Opening line.
pub const BANNER: &str = "Welcome to Pixel Zork, a tiny text adventure.";
/// Narrated when the gem is taken.
pub const WIN_MESSAGE: &str = "As you pick up the gem, the house trembles. \
                               You have reclaimed the glowing gem. You win!";
/// Narrated when the key opens the cellar.
pub const UNLOCK_MESSAGE: &str =
    "You unlock the cellar door with the small key. The door is now open.";
/// Narrated when the key is used on the open cellar door.
pub const NOTHING_TO_UNLOCK: &str = "There's nothing to unlock here with the key.";

/// Builds the house.
#[must_use]
pub fn house_world() -> WorldDefinition {
    WorldDefinition::new("foyer")
        .with_room(
            "foyer",
            RoomDefinition::new(
                "Foyer",
                "You are standing in the foyer of a dark old house. A dusty hallway \
                 leads north. There is a small key on a table.",
            )
            .with_exit(Direction::North, "hallway")
            .with_item(KEY),
        )
        .with_room(
            "hallway",
            RoomDefinition::new(
                "Hallway",
                "A long hallway with portraits on the walls. Doors lead east and west. \
                 Stairs go up.",
            )
            .with_exit(Direction::South, "foyer")
            .with_exit(Direction::East, "kitchen")
            .with_exit(Direction::West, "library")
            .with_exit(Direction::Up, "attic"),
        )
        .with_room(
            "kitchen",
            RoomDefinition::new(
                "Kitchen",
                "An abandoned kitchen. A rusty knife lies by the sink. There's a closed \
                 cellar door to the north with a lock.",
            )
            .with_exit(Direction::West, "hallway")
            .with_exit(Direction::North, "cellar")
            .with_item("rusty knife")
            .with_locked(Direction::North),
        )
        .with_room(
            "cellar",
            RoomDefinition::new(
                "Cellar",
                "A cold, damp cellar. You see a glowing gem on a pedestal.",
            )
            .with_exit(Direction::South, "kitchen")
            .with_item(GEM),
        )
        .with_room(
            "library",
            RoomDefinition::new(
                "Library",
                "Rows of old books. A large book on a lectern looks out of place.",
            )
            .with_exit(Direction::East, "hallway")
            .with_item("ancient book"),
        )
        .with_room(
            "attic",
            RoomDefinition::new("Attic", "Cobwebs and trunks. A hatch is here leading further up.")
                .with_exit(Direction::Down, "hallway")
                .with_exit(Direction::Up, "roof"),
        )
        .with_room(
            "roof",
            RoomDefinition::new(
                "Roof",
                "You are on the roof under a starry sky. There's a telescope here.",
            )
            .with_exit(Direction::Down, "attic")
            .with_item("telescope"),
        )
}

/// The house puzzles.
#[must_use]
pub fn house_rules() -> RuleBook {
    RuleBook::new()
        .with_rule(
            UseRule::new(KEY, "kitchen", UNLOCK_MESSAGE)
                .with_precondition(Precondition::ExitLocked(Direction::North))
                .with_effect(Effect::Unlock(Direction::North))
                .otherwise(NOTHING_TO_UNLOCK),
        )
        .with_rule(UseRule::new(
            "rusty knife",
            "cellar",
            "You cannot use the knife here in a special way, but it might be useful elsewhere.",
        ))
}

/// The house configuration: gem wins, play continues afterwards.
#[must_use]
pub fn house_config() -> EngineConfig {
    EngineConfig::new()
        .with_win_item(GEM, WIN_MESSAGE)
        .with_banner(BANNER)
}

impl Game {
    /// Starts a session in the standard house.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in house; the signature matches
    /// [`Game::new`].
    pub fn house() -> Result<Self> {
        Self::new(house_world(), house_rules(), house_config())
    }
}

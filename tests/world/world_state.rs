//! Integration tests for World state management
//!
//! Tests world immutability, item movement, locks and reset.

use pixelzork_engine::stdlib::{GEM, KEY, house_world};
use pixelzork_foundation::{Direction, RoomId};
use pixelzork_world::World;

fn house() -> World {
    World::from_definition(house_world()).unwrap()
}

fn id(s: &str) -> RoomId {
    RoomId::from(s)
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn rooms_iterate_in_id_order() {
    let world = house();
    let ids: Vec<&str> = world.rooms().map(|r| r.id().as_str()).collect();
    assert_eq!(
        ids,
        vec!["attic", "cellar", "foyer", "hallway", "kitchen", "library", "roof"]
    );
}

#[test]
fn exits_resolve() {
    let world = house();
    assert_eq!(world.exit(&id("hallway"), Direction::Up).unwrap(), Some(&id("attic")));
    assert_eq!(world.exit(&id("hallway"), Direction::Down).unwrap(), None);
}

#[test]
fn unknown_room_is_not_found() {
    let world = house();
    assert!(world.room(&id("garden")).unwrap_err().is_not_found());
    assert!(world.items(&id("garden")).unwrap_err().is_not_found());
}

#[test]
fn locate_item_finds_its_room() {
    let world = house();
    assert_eq!(world.locate_item(GEM), Some(&id("cellar")));
    assert_eq!(world.locate_item("lantern"), None);
}

// =============================================================================
// World Immutability
// =============================================================================

#[test]
fn remove_item_returns_new_world() {
    let world = house();
    let taken = world.remove_item(&id("foyer"), KEY).unwrap().unwrap();

    assert!(world.contains_item(&id("foyer"), KEY).unwrap());
    assert!(!taken.contains_item(&id("foyer"), KEY).unwrap());
}

#[test]
fn removing_absent_item_yields_none() {
    let world = house();
    assert!(world.remove_item(&id("foyer"), GEM).unwrap().is_none());
}

#[test]
fn added_items_append() {
    let world = house().add_item(&id("library"), KEY).unwrap();
    assert_eq!(
        world.items(&id("library")).unwrap(),
        vec!["ancient book".to_string(), KEY.to_string()]
    );
}

#[test]
fn set_locked_returns_new_world() {
    let world = house();
    let open = world.set_locked(&id("kitchen"), Direction::North, false).unwrap();

    assert!(world.is_locked(&id("kitchen"), Direction::North).unwrap());
    assert!(!open.is_locked(&id("kitchen"), Direction::North).unwrap());
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn reset_restores_items_and_locks() {
    let original = house();
    let changed = original
        .remove_item(&id("cellar"), GEM)
        .unwrap()
        .unwrap()
        .add_item(&id("roof"), GEM)
        .unwrap()
        .set_locked(&id("kitchen"), Direction::North, false)
        .unwrap();

    assert_ne!(changed, original);
    assert_eq!(changed.reset(), original);
}

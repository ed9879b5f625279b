//! Command narration against the house

use pixelzork_engine::actions::{HELP, NO_EXIT, NOT_HELD, NOT_HERE, NOT_UNDERSTOOD};
use pixelzork_engine::stdlib::KEY;
use pixelzork_engine::{Game, LineKind};
use pixelzork_foundation::RoomId;

fn house() -> Game {
    Game::house().unwrap()
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn moving_describes_the_new_room() {
    let mut game = house();
    let outcome = game.submit_command("north").unwrap();

    assert_eq!(outcome.lines[0].text, "> north");
    assert_eq!(outcome.lines[1].kind, LineKind::Title);
    assert_eq!(outcome.lines[1].text, "Hallway");
    assert!(outcome.lines[2].text.starts_with("A long hallway"));
    assert_eq!(outcome.status.moves, 1);
}

#[test]
fn missing_exit_is_narrated() {
    let mut game = house();
    let outcome = game.submit_command("west").unwrap();
    assert!(outcome.mentions(NO_EXIT));
    assert_eq!(outcome.status.moves, 0);
}

#[test]
fn go_with_unknown_heading_is_a_missing_exit() {
    let mut game = house();
    assert!(game.submit_command("go sideways").unwrap().mentions(NO_EXIT));
}

#[test]
fn stairs_lead_to_the_roof() {
    let mut game = house();
    for command in ["n", "u", "up"] {
        game.submit_command(command).unwrap();
    }
    let outcome = game.submit_command("look").unwrap();
    assert_eq!(outcome.status.room_name, "Roof");
    assert!(outcome.mentions("You see here: telescope"));
}

// =============================================================================
// Items
// =============================================================================

#[test]
fn take_and_inventory() {
    let mut game = house();
    assert!(game.submit_command("take small key").unwrap().mentions("You take the small key."));

    let outcome = game.submit_command("i").unwrap();
    assert_eq!(outcome.lines[1].kind, LineKind::System);
    assert_eq!(outcome.lines[1].text, "You are carrying: small key");
}

#[test]
fn empty_inventory_says_nothing() {
    let mut game = house();
    assert!(game.submit_command("inventory").unwrap().mentions("You are carrying: nothing"));
}

#[test]
fn take_absent_item() {
    let mut game = house();
    assert!(game.submit_command("take telescope").unwrap().mentions(NOT_HERE));
}

#[test]
fn drop_unheld_item() {
    let mut game = house();
    assert!(game.submit_command("drop small key").unwrap().mentions(NOT_HELD));
}

#[test]
fn dropped_items_stay_where_they_fall() {
    let mut game = house();
    game.submit_command("take small key").unwrap();
    game.submit_command("n").unwrap();
    game.submit_command("drop small key").unwrap();

    assert!(game.world().contains_item(&RoomId::from("hallway"), KEY).unwrap());
    let outcome = game.submit_command("look").unwrap();
    assert!(outcome.mentions("You see here: small key"));
}

#[test]
fn item_names_are_case_insensitive() {
    let mut game = house();
    assert!(game.submit_command("GET Small Key").unwrap().mentions("You take the small key."));
}

// =============================================================================
// Misc
// =============================================================================

#[test]
fn help_lists_commands() {
    let mut game = house();
    let outcome = game.submit_command("help").unwrap();
    assert_eq!(outcome.lines[1].text, HELP);
}

#[test]
fn missing_argument_is_not_understood() {
    let mut game = house();
    assert!(game.submit_command("take").unwrap().mentions(NOT_UNDERSTOOD));
}

//! Properties that hold for any sequence of commands

use pixelzork_engine::actions::NOT_UNDERSTOOD;
use pixelzork_engine::{Game, GameState};
use pixelzork_foundation::Direction;
use pixelzork_world::World;
use proptest::prelude::*;

const COMMANDS: &[&str] = &[
    "n",
    "s",
    "e",
    "w",
    "u",
    "d",
    "look",
    "i",
    "help",
    "take small key",
    "take rusty knife",
    "take glowing gem",
    "take ancient book",
    "take telescope",
    "drop small key",
    "drop rusty knife",
    "drop ancient book",
    "use small key",
    "use rusty knife",
    "go nowhere",
];

fn command() -> impl Strategy<Value = &'static str> {
    prop::sample::select(COMMANDS)
}

fn wander(commands: &[&str]) -> Game {
    let mut game = Game::house().unwrap();
    for command in commands {
        game.submit_command(command).unwrap();
    }
    game
}

/// Every item is in exactly one place: one room or the inventory.
fn items_conserved(world: &World, state: &GameState) -> bool {
    let mut everything: Vec<String> = state.inventory().to_vec();
    for room in world.rooms() {
        everything.extend(room.items().map(str::to_string));
    }
    everything.sort();
    let before = everything.len();
    everything.dedup();
    before == everything.len() && before == 5
}

proptest! {
    #[test]
    fn items_are_never_duplicated_or_lost(
        commands in prop::collection::vec(command(), 0..40)
    ) {
        let game = wander(&commands);
        prop_assert!(items_conserved(game.world(), game.state()));
    }

    #[test]
    fn missing_exits_change_nothing(
        commands in prop::collection::vec(command(), 0..20),
        direction in prop::sample::select(Direction::ALL.to_vec()),
    ) {
        let mut game = wander(&commands);
        let here = game.state().current_room().clone();
        if game.world().exit(&here, direction).unwrap().is_none() {
            let before = game.state().clone();
            game.submit_command(direction.as_str()).unwrap();
            prop_assert_eq!(game.state(), &before);
        }
    }

    #[test]
    fn drop_then_take_is_two_moves(commands in prop::collection::vec(command(), 0..20)) {
        let mut game = wander(&commands);
        if let Some(item) = game.state().inventory().first().cloned() {
            let world = game.world().clone();
            let moves = game.state().moves();

            game.submit_command(&format!("drop {item}")).unwrap();
            game.submit_command(&format!("take {item}")).unwrap();

            prop_assert_eq!(game.state().moves(), moves + 2);
            prop_assert!(game.state().holds(&item));
            let here = game.state().current_room().clone();
            prop_assert_eq!(game.world().items(&here).unwrap(), world.items(&here).unwrap());
        }
    }

    #[test]
    fn take_succeeds_only_once(commands in prop::collection::vec(command(), 0..20)) {
        let mut game = wander(&commands);
        let here = game.state().current_room().clone();
        if let Some(item) = game.world().items(&here).unwrap().first().cloned() {
            let taken = format!("You take the {item}.");
            let first = game.submit_command(&format!("take {item}")).unwrap();
            prop_assert!(first.mentions(&taken));

            let moves = game.state().moves();
            let second = game.submit_command(&format!("take {item}")).unwrap();
            prop_assert!(!second.mentions("You take"));
            prop_assert_eq!(game.state().moves(), moves);
        }
    }

    #[test]
    fn gibberish_never_changes_state(
        commands in prop::collection::vec(command(), 0..20),
        noise in "[b-cfj-kpqvxz]{1,10}( [a-z]{1,6})?",
    ) {
        let mut game = wander(&commands);
        let state = game.state().clone();
        let world = game.world().clone();

        let outcome = game.submit_command(&noise).unwrap();
        prop_assert!(outcome.mentions(NOT_UNDERSTOOD));
        prop_assert_eq!(game.state(), &state);
        prop_assert_eq!(game.world(), &world);
    }
}

//! Restart restores the starting session

use pixelzork_engine::stdlib::{GEM, KEY};
use pixelzork_engine::{Game, GameState};
use pixelzork_foundation::{Direction, RoomId};

fn played() -> Game {
    let mut game = Game::house().unwrap();
    for command in [
        "take small key",
        "n",
        "e",
        "use small key",
        "take rusty knife",
        "n",
        "take glowing gem",
        "drop rusty knife",
    ] {
        game.submit_command(command).unwrap();
    }
    game
}

fn assert_fresh(game: &Game) {
    let fresh = Game::house().unwrap();
    assert_eq!(game.state(), &GameState::new(RoomId::from("foyer")));
    assert_eq!(game.world(), fresh.world());
    assert!(game.world().is_locked(&RoomId::from("kitchen"), Direction::North).unwrap());
    assert!(game.world().contains_item(&RoomId::from("foyer"), KEY).unwrap());
    assert!(game.world().contains_item(&RoomId::from("cellar"), GEM).unwrap());
}

#[test]
fn restart_command_restores_everything() {
    let mut game = played();
    assert!(game.state().has_won());

    let outcome = game.submit_command("restart").unwrap();
    assert_eq!(outcome.lines[0].text, "> restart");
    assert_eq!(outcome.lines[1].text, "Game restarted.");
    assert_eq!(outcome.lines[2].text, "Foyer");
    assert_eq!(outcome.status.moves, 0);
    assert_fresh(&game);
}

#[test]
fn restart_method_matches_command() {
    let mut game = played();
    let outcome = game.restart().unwrap();
    assert_eq!(outcome.lines[0].text, "Game restarted.");
    assert_fresh(&game);
}

#[test]
fn the_game_can_be_won_again_after_restart() {
    let mut game = played();
    game.restart().unwrap();
    for command in ["take small key", "n", "e", "use small key", "n"] {
        game.submit_command(command).unwrap();
    }
    assert!(game.submit_command("take glowing gem").unwrap().mentions("You win!"));
}

//! Winning the house from the foyer

use pixelzork_engine::actions::GAME_OVER;
use pixelzork_engine::stdlib::{GEM, KEY, WIN_MESSAGE, house_rules, house_world};
use pixelzork_engine::{EngineConfig, Game, LineKind, WinPolicy};

const WINNING_RUN: &[&str] = &[
    "take small key",
    "n",
    "e",
    "use small key",
    "n",
    "take glowing gem",
];

#[test]
fn winning_run_wins_exactly_once() {
    let mut game = Game::house().unwrap();
    let mut wins = 0;

    for command in WINNING_RUN {
        let outcome = game.submit_command(command).unwrap();
        wins += outcome.lines.iter().filter(|l| l.kind == LineKind::Win).count();
    }

    assert_eq!(wins, 1);
    assert!(game.state().has_won());
    assert_eq!(game.state().moves(), 6);
    assert_eq!(game.state().inventory(), &[KEY.to_string(), GEM.to_string()]);
}

#[test]
fn win_line_follows_the_take() {
    let mut game = Game::house().unwrap();
    let (last, setup) = WINNING_RUN.split_last().unwrap();
    for command in setup {
        game.submit_command(command).unwrap();
    }

    let outcome = game.submit_command(last).unwrap();
    let texts: Vec<&str> = outcome.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["> take glowing gem", "You take the glowing gem.", WIN_MESSAGE]
    );
}

#[test]
fn retaking_the_gem_does_not_win_again() {
    let mut game = Game::house().unwrap();
    for command in WINNING_RUN {
        game.submit_command(command).unwrap();
    }
    game.submit_command("drop glowing gem").unwrap();
    let outcome = game.submit_command("take glowing gem").unwrap();

    assert!(outcome.mentions("You take the glowing gem."));
    assert!(!outcome.has_kind(LineKind::Win));
}

#[test]
fn play_continues_after_the_win_by_default() {
    let mut game = Game::house().unwrap();
    for command in WINNING_RUN {
        game.submit_command(command).unwrap();
    }
    assert_eq!(game.submit_command("s").unwrap().status.room_name, "Kitchen");
}

#[test]
fn halt_policy_stops_play_after_the_win() {
    let config = pixelzork_engine::stdlib::house_config().with_win_policy(WinPolicy::Halt);
    let mut game = Game::new(house_world(), house_rules(), config).unwrap();
    for command in WINNING_RUN {
        game.submit_command(command).unwrap();
    }

    let outcome = game.submit_command("s").unwrap();
    assert!(outcome.mentions(GAME_OVER));
    assert_eq!(outcome.status.room_name, "Cellar");
    assert!(game.submit_command("look").unwrap().mentions("Cellar"));
}

#[test]
fn worlds_without_a_win_never_win() {
    let mut game = Game::new(house_world(), house_rules(), EngineConfig::new()).unwrap();
    for command in WINNING_RUN {
        assert!(!game.submit_command(command).unwrap().has_kind(LineKind::Win));
    }
    assert!(!game.state().has_won());
}

#[test]
fn sessions_are_independent() {
    let mut first = Game::house().unwrap();
    let second = Game::house().unwrap();
    first.submit_command("take small key").unwrap();

    assert!(first.state().holds(KEY));
    assert!(!second.state().holds(KEY));
    assert_eq!(second.state().moves(), 0);
}

//! World files and scripted play through the runtime

use pixelzork_engine::stdlib::house_config;
use pixelzork_engine::{EngineConfig, Game};
use pixelzork_runtime::{LineEditor, ReadResult, Renderer, Repl, WorldFile};

/// Editor that never has input; scripts drive these sessions.
struct NoInput;

impl LineEditor for NoInput {
    fn read_line(&mut self, _prompt: &str) -> pixelzork_foundation::Result<ReadResult> {
        Ok(ReadResult::Eof)
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

const LIGHTHOUSE: &str = r#"{
    "start": "shore",
    "rooms": {
        "shore": {
            "name": "Shore",
            "description": "Waves break on black rocks.",
            "exits": { "up": "lamp_room" },
            "items": ["oil can"],
            "locked": { "up": true }
        },
        "lamp_room": {
            "name": "Lamp Room",
            "description": "A great lens waits for light.",
            "exits": { "down": "shore" }
        }
    },
    "rules": [
        {
            "item": "oil can",
            "room": "shore",
            "precondition": { "exit_locked": "up" },
            "effect": { "unlock": "up" },
            "narration": "You oil the rusted hatch until it swings open."
        }
    ],
    "win": { "item": "oil can", "message": "The keeper would be proud." }
}"#;

#[test]
fn house_file_plays_like_the_built_in_house() {
    let mut from_file = WorldFile::house().into_game(house_config()).unwrap();
    let mut built_in = Game::house().unwrap();

    for command in ["take small key", "n", "e", "use small key", "n", "take glowing gem"] {
        assert_eq!(
            from_file.submit_command(command).unwrap(),
            built_in.submit_command(command).unwrap()
        );
    }
}

#[test]
fn loaded_world_is_playable() {
    let file = WorldFile::from_json(LIGHTHOUSE).unwrap();
    let mut game = file.into_game(EngineConfig::new()).unwrap();

    assert!(game.submit_command("take oil can").unwrap().mentions("The keeper would be proud."));
    assert!(game.submit_command("use oil can").unwrap().mentions("swings open"));
    assert_eq!(game.submit_command("u").unwrap().status.room_name, "Lamp Room");
}

#[test]
fn rule_pointing_at_a_missing_exit_is_rejected() {
    let broken = LIGHTHOUSE.replace(
        r#""effect": { "unlock": "up" }"#,
        r#""effect": { "unlock": "east" }"#,
    );
    let file = WorldFile::from_json(&broken).unwrap();
    let err = file.into_game(EngineConfig::new()).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn script_transcript_through_the_repl() {
    let game = WorldFile::from_json(LIGHTHOUSE)
        .unwrap()
        .into_game(EngineConfig::new())
        .unwrap();
    let mut repl = Repl::with_editor(NoInput, game)
        .with_renderer(Renderer::plain())
        .without_status();

    let transcript = repl
        .eval_script("# climb the lighthouse\ntake oil can\nuse oil can\nup\n", "lighthouse.txt")
        .unwrap();

    let lines: Vec<&str> = transcript.lines().collect();
    assert_eq!(lines[0], "> take oil can");
    assert_eq!(lines[1], "You take the oil can.");
    assert_eq!(lines[2], "The keeper would be proud.");
    assert!(transcript.ends_with("A great lens waits for light."));
    assert_eq!(repl.game().state().moves(), 3);
}

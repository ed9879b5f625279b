//! Full parser pipeline tests

use pixelzork_foundation::Direction;
use pixelzork_parser::stdlib::standard_vocabulary;
use pixelzork_parser::{
    ArgumentRule, Command, CommandParser, Heading, ParseError, ParseResult, Verb,
    VocabularyRegistry,
};
use proptest::prelude::*;

fn parse(input: &str) -> ParseResult {
    CommandParser::default().parse(input)
}

fn command(input: &str) -> Command {
    match parse(input) {
        ParseResult::Success(parsed) => parsed.command,
        other => panic!("expected a command for {input:?}, got {other:?}"),
    }
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn bare_directions_move() {
    assert_eq!(command("n"), Command::Go(Heading::Known(Direction::North)));
    assert_eq!(command("DOWN"), Command::Go(Heading::Known(Direction::Down)));
}

#[test]
fn go_accepts_trailing_period() {
    assert_eq!(command("go west."), Command::Go(Heading::Known(Direction::West)));
}

#[test]
fn go_with_unknown_heading_still_parses() {
    assert_eq!(
        command("go sideways"),
        Command::Go(Heading::Unknown("sideways".into()))
    );
}

// =============================================================================
// Arguments
// =============================================================================

#[test]
fn multi_word_items_are_joined() {
    assert_eq!(command("get   Glowing   Gem"), Command::Take("glowing gem".into()));
    assert_eq!(command("drop rusty knife"), Command::Drop("rusty knife".into()));
}

#[test]
fn ignored_arguments_are_dropped() {
    assert_eq!(command("look around"), Command::Look);
    assert_eq!(command("i please"), Command::Inventory);
}

#[test]
fn use_without_item_parses() {
    assert_eq!(command("use"), Command::Use(String::new()));
}

#[test]
fn required_argument_missing_is_an_error() {
    match parse("take") {
        ParseResult::Error { raw, error } => {
            assert_eq!(raw, "take");
            assert_eq!(error, ParseError::MissingArgument(Verb::Take));
        }
        other => panic!("unexpected {other:?}"),
    }
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn unknown_verb_is_an_error() {
    match parse("xyzzy now") {
        ParseResult::Error { error, .. } => {
            assert_eq!(error, ParseError::UnknownVerb("xyzzy".into()));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn blank_input_is_empty() {
    assert_eq!(parse("   "), ParseResult::Empty);
    assert_eq!(parse("").raw(), None);
}

#[test]
fn raw_is_trimmed_but_keeps_case() {
    assert_eq!(parse("  LOOK ").raw(), Some("LOOK"));
}

#[test]
fn custom_parser_uses_its_vocabulary() {
    let mut vocab = standard_vocabulary();
    vocab.register_verb(Verb::Look, &["l"], ArgumentRule::Ignored);
    let parser = CommandParser::new(vocab);
    assert!(matches!(parser.parse("l"), ParseResult::Success(_)));

    let bare = CommandParser::new(VocabularyRegistry::new());
    assert!(matches!(bare.parse("look"), ParseResult::Error { .. }));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn parse_never_panics(input in "\\PC{0,40}") {
        let _ = parse(&input);
    }

    #[test]
    fn take_keeps_the_whole_noun(words in prop::collection::vec("[a-z]{1,8}", 1..4)) {
        let noun = words.join(" ");
        prop_assert_eq!(command(&format!("take {noun}")), Command::Take(noun));
    }

    #[test]
    fn case_does_not_matter(upper in any::<bool>()) {
        let input = if upper { "INVENTORY" } else { "inventory" };
        prop_assert_eq!(command(input), Command::Inventory);
    }
}

//! Vocabulary integration tests

use pixelzork_foundation::Direction;
use pixelzork_parser::stdlib::standard_vocabulary;
use pixelzork_parser::{ArgumentRule, Verb, VocabularyRegistry};

#[test]
fn synonyms_share_a_verb() {
    let vocab = standard_vocabulary();
    assert_eq!(vocab.lookup_verb("get").unwrap().verb, Verb::Take);
    assert_eq!(vocab.lookup_verb("i").unwrap().verb, Verb::Inventory);
}

#[test]
fn argument_rules_follow_the_verb() {
    let vocab = standard_vocabulary();
    assert_eq!(vocab.lookup_verb("take").unwrap().argument, ArgumentRule::Required);
    assert_eq!(vocab.lookup_verb("use").unwrap().argument, ArgumentRule::Optional);
    assert_eq!(vocab.lookup_verb("look").unwrap().argument, ArgumentRule::Ignored);
}

#[test]
fn direction_normalization_strips_one_period() {
    let vocab = standard_vocabulary();
    assert_eq!(vocab.normalize_direction("up."), Some(Direction::Up));
    assert_eq!(vocab.normalize_direction("up.."), None);
    assert_eq!(vocab.lookup_direction("up."), None);
}

#[test]
fn custom_vocabulary_adds_words() {
    let mut vocab = VocabularyRegistry::new();
    vocab.register_verb(Verb::Look, &["examine", "x"], ArgumentRule::Ignored);
    vocab.register_direction(Direction::North, &["fore"]);

    assert_eq!(vocab.lookup_verb("x").unwrap().verb, Verb::Look);
    assert_eq!(vocab.lookup_direction("fore"), Some(Direction::North));
    assert!(vocab.lookup_verb("look").is_none());
}

#[test]
fn words_cover_verbs_and_directions() {
    let words = standard_vocabulary().words();
    for word in ["take", "get", "restart", "north", "d"] {
        assert!(words.iter().any(|w| w == word), "missing {word}");
    }
}

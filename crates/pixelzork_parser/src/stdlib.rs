//! Standard vocabulary.
//!
//! The verbs and directions every Pixel Zork world understands.

use pixelzork_foundation::Direction;

use crate::vocabulary::{ArgumentRule, Verb, VocabularyRegistry};

/// Verb words, argument rules, and synonyms.
pub const VERBS: &[(Verb, &[&str], ArgumentRule)] = &[
    (Verb::Go, &["go"], ArgumentRule::Required),
    (Verb::Look, &["look"], ArgumentRule::Ignored),
    (Verb::Take, &["take", "get"], ArgumentRule::Required),
    (Verb::Drop, &["drop"], ArgumentRule::Required),
    (Verb::Inventory, &["inventory", "i"], ArgumentRule::Ignored),
    (Verb::Use, &["use"], ArgumentRule::Optional),
    (Verb::Help, &["help"], ArgumentRule::Ignored),
    (Verb::Restart, &["restart"], ArgumentRule::Ignored),
];

/// Builds the standard vocabulary: every verb above plus all six
/// directions under their full name and single-letter abbreviation.
#[must_use]
pub fn standard_vocabulary() -> VocabularyRegistry {
    let mut registry = VocabularyRegistry::new();

    for (verb, words, argument) in VERBS {
        registry.register_verb(*verb, words, *argument);
    }

    for direction in Direction::ALL {
        registry.register_direction(direction, &[direction.as_str(), direction.abbreviation()]);
    }

    registry
}

//! Vocabulary registry for parser vocabulary definitions.
//!
//! Stores verbs and directions, with their synonyms, at runtime.

use std::collections::HashMap;
use std::fmt;

use pixelzork_foundation::Direction;

/// A canonical verb the engine knows how to perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Move through an exit.
    Go,
    /// Describe the current room.
    Look,
    /// Pick up an item.
    Take,
    /// Put down an item.
    Drop,
    /// List held items.
    Inventory,
    /// Use a held item.
    Use,
    /// List commands.
    Help,
    /// Start over.
    Restart,
}

impl Verb {
    /// Returns the canonical verb word.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Look => "look",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Inventory => "inventory",
            Self::Use => "use",
            Self::Help => "help",
            Self::Restart => "restart",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a verb treats the words following it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArgumentRule {
    /// Anything after the verb is ignored.
    Ignored,
    /// An argument must follow; without one the command is not understood.
    Required,
    /// An argument may follow; the action decides what an empty one means.
    Optional,
}

/// A registered verb with its canonical name and synonyms.
#[derive(Clone, Debug)]
pub struct VerbEntry {
    /// Canonical verb
    pub verb: Verb,
    /// Words that map to this verb, including the canonical word
    pub words: Vec<String>,
    /// Argument handling
    pub argument: ArgumentRule,
}

/// A registered direction with its synonyms.
#[derive(Clone, Debug)]
pub struct DirectionEntry {
    /// Canonical direction
    pub direction: Direction,
    /// Words that map to this direction, including the canonical word
    pub words: Vec<String>,
}

/// Runtime storage for all vocabulary definitions.
#[derive(Clone, Debug, Default)]
pub struct VocabularyRegistry {
    /// Verbs in registration order
    verbs: Vec<VerbEntry>,
    /// Word -> index into `verbs`
    verb_words: HashMap<String, usize>,
    /// Directions in registration order
    directions: Vec<DirectionEntry>,
    /// Word -> direction
    direction_words: HashMap<String, Direction>,
}

impl VocabularyRegistry {
    /// Creates a new empty vocabulary registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a verb with its words.
    ///
    /// A word already bound to another verb is rebound to this one.
    pub fn register_verb(&mut self, verb: Verb, words: &[&str], argument: ArgumentRule) {
        let index = self.verbs.len();
        for word in words {
            self.verb_words.insert((*word).to_string(), index);
        }
        self.verbs.push(VerbEntry {
            verb,
            words: words.iter().map(|w| (*w).to_string()).collect(),
            argument,
        });
    }

    /// Looks up a verb by word (canonical or synonym).
    #[must_use]
    pub fn lookup_verb(&self, word: &str) -> Option<&VerbEntry> {
        self.verb_words.get(word).map(|&i| &self.verbs[i])
    }

    /// Registers a direction with its words.
    pub fn register_direction(&mut self, direction: Direction, words: &[&str]) {
        for word in words {
            self.direction_words.insert((*word).to_string(), direction);
        }
        self.directions.push(DirectionEntry {
            direction,
            words: words.iter().map(|w| (*w).to_string()).collect(),
        });
    }

    /// Looks up a direction by word (canonical or abbreviation).
    #[must_use]
    pub fn lookup_direction(&self, word: &str) -> Option<Direction> {
        self.direction_words.get(word).copied()
    }

    /// Looks up a direction after stripping one trailing period.
    ///
    /// Used for the argument of `go`, where players type "go north.".
    #[must_use]
    pub fn normalize_direction(&self, word: &str) -> Option<Direction> {
        let word = word.strip_suffix('.').unwrap_or(word);
        self.lookup_direction(word)
    }

    /// Returns all registered verbs in registration order.
    #[must_use]
    pub fn verbs(&self) -> &[VerbEntry] {
        &self.verbs
    }

    /// Returns all registered directions in registration order.
    #[must_use]
    pub fn directions(&self) -> &[DirectionEntry] {
        &self.directions
    }

    /// Returns every known word, verbs first. Used for completion.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.verbs
            .iter()
            .flat_map(|v| v.words.iter())
            .chain(self.directions.iter().flat_map(|d| d.words.iter()))
            .cloned()
            .collect()
    }
}

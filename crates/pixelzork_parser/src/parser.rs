//! Main parser pipeline.
//!
//! Orchestrates the full parsing flow from raw input to [`Command`].

use thiserror::Error;

use crate::command::{Command, Heading};
use crate::tokenizer::{InputToken, InputTokenizer};
use crate::vocabulary::{ArgumentRule, Verb, VocabularyRegistry};

/// A successfully parsed command together with the text that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The trimmed input, as typed
    pub raw: String,
    /// The command to dispatch
    pub command: Command,
}

/// Result of parsing player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// Blank input; nothing to echo or do
    Empty,
    /// Successfully parsed into a command
    Success(ParsedCommand),
    /// Not understood
    Error {
        /// The trimmed input, as typed
        raw: String,
        /// Why it was not understood
        error: ParseError,
    },
}

impl ParseResult {
    /// Returns the trimmed input, unless it was blank.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Success(parsed) => Some(&parsed.raw),
            Self::Error { raw, .. } => Some(raw),
        }
    }
}

/// Why input was not understood.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The first word is not a verb or direction.
    #[error("unknown verb: {0}")]
    UnknownVerb(String),
    /// The verb needs an argument and none was given.
    #[error("{0} needs an argument")]
    MissingArgument(Verb),
}

/// Parses raw player input into commands.
#[derive(Clone, Debug)]
pub struct CommandParser {
    vocabulary: VocabularyRegistry,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(crate::stdlib::standard_vocabulary())
    }
}

impl CommandParser {
    /// Creates a new parser with the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: VocabularyRegistry) -> Self {
        Self { vocabulary }
    }

    /// Returns the vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &VocabularyRegistry {
        &self.vocabulary
    }

    /// Parses player input into a command.
    #[must_use]
    pub fn parse(&self, input: &str) -> ParseResult {
        let raw = input.trim();
        if raw.is_empty() {
            return ParseResult::Empty;
        }

        // 1. Tokenize
        let tokens = InputTokenizer::tokenize(raw);
        let words: Vec<&str> = tokens.iter().filter_map(InputToken::as_word).collect();
        let Some((&verb_word, rest)) = words.split_first() else {
            return ParseResult::Empty;
        };
        let argument = rest.join(" ");

        // 2. Resolve the verb and build the command
        match self.resolve(verb_word, argument) {
            Ok(command) => ParseResult::Success(ParsedCommand {
                raw: raw.to_string(),
                command,
            }),
            Err(error) => ParseResult::Error {
                raw: raw.to_string(),
                error,
            },
        }
    }

    fn resolve(&self, verb_word: &str, argument: String) -> Result<Command, ParseError> {
        // A bare direction is shorthand for "go <direction>"
        if let Some(direction) = self.vocabulary.lookup_direction(verb_word) {
            return Ok(Command::Go(Heading::Known(direction)));
        }

        let entry = self
            .vocabulary
            .lookup_verb(verb_word)
            .ok_or_else(|| ParseError::UnknownVerb(verb_word.to_string()))?;

        if entry.argument == ArgumentRule::Required && argument.is_empty() {
            return Err(ParseError::MissingArgument(entry.verb));
        }

        let command = match entry.verb {
            Verb::Go => match self.vocabulary.normalize_direction(&argument) {
                Some(direction) => Command::Go(Heading::Known(direction)),
                None => Command::Go(Heading::Unknown(argument)),
            },
            Verb::Look => Command::Look,
            Verb::Take => Command::Take(argument),
            Verb::Drop => Command::Drop(argument),
            Verb::Inventory => Command::Inventory,
            Verb::Use => Command::Use(argument),
            Verb::Help => Command::Help,
            Verb::Restart => Command::Restart,
        };

        Ok(command)
    }
}

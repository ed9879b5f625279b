//! Input tokenization.
//!
//! Converts raw player input into a stream of tokens.

/// A token from player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputToken {
    /// A lowercase word
    Word(String),
    /// End of input
    End,
}

impl InputToken {
    /// Returns the word, if this token is one.
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(w) => Some(w),
            Self::End => None,
        }
    }
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into tokens.
    ///
    /// - Converts words to lowercase
    /// - Splits on runs of whitespace
    /// - Keeps punctuation attached to its word
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<InputToken> {
        let mut tokens: Vec<InputToken> = input
            .split_whitespace()
            .map(|word| InputToken::Word(word.to_lowercase()))
            .collect();

        tokens.push(InputToken::End);
        tokens
    }
}

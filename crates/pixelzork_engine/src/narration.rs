//! Narration produced by actions.
//!
//! The engine never renders anything. It emits [`Line`]s tagged with a
//! [`LineKind`] and leaves styling to whoever displays them.

use std::fmt;

/// Styling intent of a narration line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// The player's command, echoed back.
    Command,
    /// A room name heading.
    Title,
    /// Ordinary narration.
    Text,
    /// Engine messages: item lists, help, errors in understanding.
    System,
    /// The win announcement.
    Win,
}

/// One line of narration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Styling intent.
    pub kind: LineKind,
    /// Plain text, never markup.
    pub text: String,
}

impl Line {
    /// Creates a line.
    #[must_use]
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Collects narration while an action runs.
#[derive(Clone, Debug, Default)]
pub struct Narrator {
    lines: Vec<Line>,
}

impl Narrator {
    /// Creates an empty narrator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Echoes a command.
    pub fn command(&mut self, raw: &str) {
        self.push(LineKind::Command, format!("> {raw}"));
    }

    /// Adds a heading.
    pub fn title(&mut self, text: impl Into<String>) {
        self.push(LineKind::Title, text);
    }

    /// Adds ordinary narration.
    pub fn say(&mut self, text: impl Into<String>) {
        self.push(LineKind::Text, text);
    }

    /// Adds an engine message.
    pub fn system(&mut self, text: impl Into<String>) {
        self.push(LineKind::System, text);
    }

    /// Adds the win announcement.
    pub fn win(&mut self, text: impl Into<String>) {
        self.push(LineKind::Win, text);
    }

    /// Gets lines produced so far.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Takes the lines, leaving an empty vec.
    pub fn take_lines(&mut self) -> Vec<Line> {
        std::mem::take(&mut self.lines)
    }

    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(Line::new(kind, text));
    }
}

/// Snapshot for a status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    /// Display name of the current room.
    pub room_name: String,
    /// Move counter.
    pub moves: u64,
    /// Held items in pickup order.
    pub inventory: Vec<String>,
}

/// Everything a command produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Narration in order.
    pub lines: Vec<Line>,
    /// State after the command.
    pub status: Status,
}

impl Outcome {
    /// Returns true if any line has the given kind.
    #[must_use]
    pub fn has_kind(&self, kind: LineKind) -> bool {
        self.lines.iter().any(|l| l.kind == kind)
    }

    /// Returns true if any line contains `needle`.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.text.contains(needle))
    }

    /// Joins all line texts with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

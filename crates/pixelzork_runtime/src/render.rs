//! Terminal styling for narration.

use pixelzork_engine::{Line, LineKind, Outcome, Status};

/// Turns narration lines into terminal text.
#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    color: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Renderer {
    /// Creates a renderer, with or without ANSI colour.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Creates a renderer that emits plain text.
    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// Returns true if ANSI colour is enabled.
    #[must_use]
    pub const fn is_color(&self) -> bool {
        self.color
    }

    /// Renders one line.
    #[must_use]
    pub fn line(&self, line: &Line) -> String {
        if !self.color {
            return line.text.clone();
        }
        let style = match line.kind {
            LineKind::Command => "2",
            LineKind::Title => "1;36",
            LineKind::Text => return line.text.clone(),
            LineKind::System => "33",
            LineKind::Win => "1;35",
        };
        self.paint(style, &line.text)
    }

    /// Renders a section heading in bold.
    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        self.paint("1", text)
    }

    /// Renders an error message in red.
    #[must_use]
    pub fn error(&self, text: &str) -> String {
        self.paint("31", text)
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{style}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    /// Renders every line of an outcome, one per row.
    #[must_use]
    pub fn outcome(&self, outcome: &Outcome) -> String {
        outcome
            .lines
            .iter()
            .map(|l| self.line(l))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders the status bar.
    #[must_use]
    pub fn status(&self, status: &Status) -> String {
        let carrying = if status.inventory.is_empty() {
            "nothing".to_string()
        } else {
            status.inventory.join(", ")
        };
        let text = format!(
            "[{}] Moves: {} | Carrying: {carrying}",
            status.room_name, status.moves
        );
        self.paint("7", &text)
    }
}

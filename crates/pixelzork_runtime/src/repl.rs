//! The main REPL implementation.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use pixelzork_engine::{Game, Outcome};
use pixelzork_foundation::{Error, ErrorContext, ErrorKind, Result};
use tracing::debug;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render::Renderer;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The session being played.
    game: Game,

    /// Styling for narration.
    renderer: Renderer,

    /// Whether to show the welcome narration on start.
    show_banner: bool,

    /// Whether to print the status bar after each command.
    show_status: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(game: Game, renderer: Renderer) -> Result<Self> {
        let editor = RustylineEditor::new(renderer.is_color())?;
        Ok(Self::with_editor(editor, game).with_renderer(renderer))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(mut editor: E, game: Game) -> Self {
        editor.set_keywords(completion_words(&game));
        Self {
            editor,
            game,
            renderer: Renderer::default(),
            show_banner: true,
            show_status: true,
            prompt: "> ".to_string(),
        }
    }

    /// Sets the renderer.
    #[must_use]
    pub const fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Disables the welcome narration.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Disables the status bar.
    #[must_use]
    pub const fn without_status(mut self) -> Self {
        self.show_status = false;
        self
    }

    /// Returns the session.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the REPL loop until end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            let welcome = self.game.welcome()?;
            self.print(&welcome);
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if matches!(e.kind, ErrorKind::Editor(_)) => return Err(e),
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        let outcome = self.submit(&input)?;
        self.print(&outcome);
        Ok(true)
    }

    /// Submits one command to the game.
    ///
    /// # Errors
    ///
    /// Returns an error if the world definition is inconsistent.
    pub fn submit(&mut self, input: &str) -> Result<Outcome> {
        self.game.submit_command(input)
    }

    /// Renders an outcome the way the REPL prints it.
    #[must_use]
    pub fn render(&self, outcome: &Outcome) -> String {
        let mut text = self.renderer.outcome(outcome);
        if self.show_status && !outcome.lines.is_empty() {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&self.renderer.status(&outcome.status));
        }
        text
    }

    /// Plays a script and returns the rendered transcript.
    ///
    /// Scripts hold one command per line. Blank lines and lines starting
    /// with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns the first command error, with `name` and the line number as
    /// context.
    pub fn eval_script(&mut self, source: &str, name: &str) -> Result<String> {
        let mut transcript = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let command = line.trim();
            if command.is_empty() || command.starts_with('#') {
                continue;
            }

            debug!(script = name, line = index + 1, %command, "script command");
            let outcome = self.submit(command).map_err(|e| {
                e.with_context(
                    ErrorContext::new()
                        .with_source(name)
                        .with_line(index + 1)
                        .with_frame(format!("command '{command}'")),
                )
            })?;
            transcript.push(self.render(&outcome));
        }

        Ok(transcript.join("\n"))
    }

    /// Reads a script file, plays it, and prints the transcript.
    ///
    /// # Errors
    ///
    /// Returns an `Io` error if the file cannot be read, or the first
    /// command error.
    pub fn run_script(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::Io(format!(
                "failed to read {}: {e}",
                path.display()
            )))
            .with_context(ErrorContext::new().with_source(path.display().to_string()))
        })?;

        let transcript = self.eval_script(&source, &path.display().to_string())?;
        if !transcript.is_empty() {
            println!("{transcript}");
        }
        Ok(())
    }

    fn print(&self, outcome: &Outcome) {
        let text = self.render(outcome);
        if !text.is_empty() {
            println!("{text}");
        }
        let _ = io::stdout().flush();
    }

    /// Prints an error to stderr.
    fn print_error(&self, error: &Error) {
        if self.renderer.is_color() {
            eprintln!("\x1b[31mError: {error}\x1b[0m");
        } else {
            eprintln!("Error: {error}");
        }
        if let Some(context) = &error.context {
            eprintln!("{context}");
        }
    }
}

/// Vocabulary words plus every word of every item in the world.
fn completion_words(game: &Game) -> Vec<String> {
    let mut words = game.parser().vocabulary().words();
    for room in game.world().rooms() {
        for item in room.items() {
            words.extend(item.split_whitespace().map(str::to_string));
        }
    }
    words.sort();
    words.dedup();
    words
}

//! The game session facade.
//!
//! A [`Game`] owns one session: the world, the session state, the parser,
//! and the rule book. Its two entry points, [`Game::submit_command`] and
//! [`Game::restart`], each run to completion and return an [`Outcome`].

use std::sync::Arc;

use pixelzork_foundation::Result;
use pixelzork_parser::{Command, CommandParser, ParseResult};
use pixelzork_world::{World, WorldDefinition};
use tracing::{debug, info, warn};

use crate::actions::{self, ActionContext, GAME_OVER, NOT_UNDERSTOOD};
use crate::config::{EngineConfig, WinPolicy};
use crate::narration::{Narrator, Outcome, Status};
use crate::rules::RuleBook;
use crate::state::GameState;

/// One play session.
#[derive(Clone, Debug)]
pub struct Game {
    world: World,
    state: GameState,
    parser: CommandParser,
    rules: RuleBook,
    config: EngineConfig,
}

impl Game {
    /// Creates a session from a world definition and its puzzle rules.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the definition or a rule is
    /// malformed.
    pub fn new(
        definition: WorldDefinition,
        rules: RuleBook,
        config: EngineConfig,
    ) -> Result<Self> {
        Self::from_shared(Arc::new(definition), rules, config)
    }

    /// Creates a session from a shared world definition.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the definition or a rule is
    /// malformed.
    pub fn from_shared(
        definition: Arc<WorldDefinition>,
        rules: RuleBook,
        config: EngineConfig,
    ) -> Result<Self> {
        let world = World::from_shared(definition)?;
        rules.validate(world.definition())?;

        Ok(Self {
            state: GameState::new(world.start_room().clone()),
            world,
            parser: CommandParser::default(),
            rules,
            config,
        })
    }

    /// Returns the session state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Returns the rule book.
    #[must_use]
    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the parser.
    #[must_use]
    pub fn parser(&self) -> &CommandParser {
        &self.parser
    }

    /// Returns the status snapshot.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if the current room does not exist.
    pub fn status(&self) -> Result<Status> {
        let room = self.world.room(self.state.current_room())?;
        Ok(Status {
            room_name: room.name().to_string(),
            moves: self.state.moves(),
            inventory: self.state.inventory().to_vec(),
        })
    }

    /// Returns the opening banner and a look at the start room.
    ///
    /// Does not change any state.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if the current room does not exist.
    pub fn welcome(&self) -> Result<Outcome> {
        let mut narrator = Narrator::new();
        if let Some(banner) = &self.config.banner {
            narrator.system(banner.clone());
        }

        let mut world = self.world.clone();
        let mut state = self.state.clone();
        actions::look(&mut ActionContext {
            world: &mut world,
            state: &mut state,
            rules: &self.rules,
            config: &self.config,
            narrator: &mut narrator,
        })?;

        self.outcome(narrator)
    }

    /// Parses and performs one command.
    ///
    /// Blank input produces an outcome with no lines. Input that is not
    /// understood produces a narration line, never an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the world definition is inconsistent. The
    /// session is left as it was before the command.
    pub fn submit_command(&mut self, input: &str) -> Result<Outcome> {
        let parsed = self.parser.parse(input);
        let mut narrator = Narrator::new();

        if self.config.echo_commands {
            if let Some(raw) = parsed.raw() {
                narrator.command(raw);
            }
        }

        match parsed {
            ParseResult::Empty => {}
            ParseResult::Error { raw, error } => {
                debug!(%raw, %error, "command not understood");
                narrator.system(NOT_UNDERSTOOD);
            }
            ParseResult::Success(parsed) => self.dispatch(&parsed.command, &mut narrator)?,
        }

        self.outcome(narrator)
    }

    /// Starts the session over from the world definition.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if the start room does not exist.
    pub fn restart(&mut self) -> Result<Outcome> {
        let mut narrator = Narrator::new();
        self.reset(&mut narrator)?;
        self.outcome(narrator)
    }

    fn dispatch(&mut self, command: &Command, narrator: &mut Narrator) -> Result<()> {
        if let Command::Restart = command {
            return self.reset(narrator);
        }

        if self.state.has_won()
            && self.config.win_policy == WinPolicy::Halt
            && command.is_state_changing()
        {
            narrator.system(GAME_OVER);
            return Ok(());
        }

        // Work on copies so a failing action leaves the session untouched
        let mut world = self.world.clone();
        let mut state = self.state.clone();
        let result = actions::perform(
            &mut ActionContext {
                world: &mut world,
                state: &mut state,
                rules: &self.rules,
                config: &self.config,
                narrator,
            },
            command,
        );

        if let Err(e) = result {
            warn!(%command, error = %e, "world definition fault");
            return Err(e);
        }

        self.world = world;
        self.state = state;
        Ok(())
    }

    fn reset(&mut self, narrator: &mut Narrator) -> Result<()> {
        info!(moves = self.state.moves(), "restarting");

        let mut world = self.world.reset();
        let mut state = GameState::new(world.start_room().clone());

        narrator.system("Game restarted.");
        actions::look(&mut ActionContext {
            world: &mut world,
            state: &mut state,
            rules: &self.rules,
            config: &self.config,
            narrator,
        })?;

        self.world = world;
        self.state = state;
        Ok(())
    }

    fn outcome(&self, mut narrator: Narrator) -> Result<Outcome> {
        Ok(Outcome {
            lines: narrator.take_lines(),
            status: self.status()?,
        })
    }
}

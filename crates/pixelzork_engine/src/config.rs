//! Engine configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What happens after the player wins.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WinPolicy {
    /// Keep accepting every command; winning is narration only.
    #[default]
    Continue,
    /// Refuse state-changing commands until the game is restarted.
    Halt,
}

/// Picking up this item wins the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WinCondition {
    /// The item to pick up.
    pub item: String,
    /// Narrated once, right after the item is taken.
    pub message: String,
}

/// Configuration for a game session.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Win condition, if the world has one.
    pub win: Option<WinCondition>,

    /// Behaviour after the win.
    pub win_policy: WinPolicy,

    /// Echo each non-blank command back as the first narration line.
    pub echo_commands: bool,

    /// Opening line shown by [`Game::welcome`](crate::Game::welcome).
    pub banner: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            win: None,
            win_policy: WinPolicy::Continue,
            echo_commands: true,
            banner: None,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with no win condition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the win condition.
    #[must_use]
    pub fn with_win_item(mut self, item: impl Into<String>, message: impl Into<String>) -> Self {
        self.win = Some(WinCondition {
            item: item.into(),
            message: message.into(),
        });
        self
    }

    /// Builder method to set the win condition from a value.
    #[must_use]
    pub fn with_win(mut self, win: Option<WinCondition>) -> Self {
        self.win = win;
        self
    }

    /// Builder method to set the win policy.
    #[must_use]
    pub fn with_win_policy(mut self, policy: WinPolicy) -> Self {
        self.win_policy = policy;
        self
    }

    /// Builder method to enable or disable command echo.
    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo_commands = echo;
        self
    }

    /// Builder method to set the opening banner.
    #[must_use]
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    /// Returns true if taking `item` wins the game.
    #[must_use]
    pub fn is_win_item(&self, item: &str) -> bool {
        self.win.as_ref().is_some_and(|w| w.item == item)
    }
}

//! Session configuration.
//!
//! A `SessionConfig` fixes everything a session needs before it starts:
//! - `min_players`: gate checked by `start()`
//! - `total_rounds`: rounds played before the game is over
//! - `prompts`: the prompt bank the sequencer is built from
//!
//! Configs can be built in code with the `with_*` methods or read from
//! TOML:
//!
//! ```toml
//! min_players = 3
//! total_rounds = 5
//! prompts = ["Tabs or spaces?", "Favorite shell?"]
//! ```
//!
//! Missing keys fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use crate::tally::PromptBank;

/// Minimum number of participants required to start a session.
pub const DEFAULT_MIN_PLAYERS: usize = 3;

/// Rounds played when the caller doesn't choose.
pub const DEFAULT_TOTAL_ROUNDS: u32 = 3;

/// Upper bound on `total_rounds`. The round counter runs one past the last
/// round, so it must stay representable.
pub const MAX_TOTAL_ROUNDS: u32 = u32::MAX - 1;

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Participants required before the session can start.
    pub min_players: usize,

    /// Number of rounds in a game (1..=MAX_TOTAL_ROUNDS).
    pub total_rounds: u32,

    /// Prompts, in the order they are asked.
    pub prompts: PromptBank,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_players: DEFAULT_MIN_PLAYERS,
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            prompts: PromptBank::builtin(),
        }
    }
}

impl SessionConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum participant count.
    #[must_use]
    pub fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = min_players;
        self
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_total_rounds(mut self, rounds: u32) -> Self {
        self.total_rounds = rounds;
        self
    }

    /// Use a different prompt bank.
    #[must_use]
    pub fn with_prompts(mut self, prompts: PromptBank) -> Self {
        self.prompts = prompts;
        self
    }

    /// Parse and validate a TOML config.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check the values a session cannot run without.
    pub fn validate(&self) -> Result<()> {
        if self.total_rounds == 0 || self.total_rounds > MAX_TOTAL_ROUNDS {
            return Err(GameError::InvalidRoundCount);
        }
        if self.prompts.is_empty() {
            return Err(GameError::EmptyPromptBank);
        }
        Ok(())
    }
}

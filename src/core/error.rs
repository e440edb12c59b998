//! Error types for the quiz core.
//!
//! Every error is a precondition violation reported synchronously to the
//! immediate caller. Nothing here is retried.

use thiserror::Error;

use super::player::ParticipantId;

/// Errors raised by tallies, sequencers and sessions.
#[derive(Debug, Error)]
pub enum GameError {
    /// An answer was submitted for a participant who never registered.
    #[error("participant '{0}' is not registered")]
    NotRegistered(ParticipantId),

    /// Too few participants to start a session.
    #[error("at least {required} participants are required, {actual} registered")]
    InsufficientPlayers { required: usize, actual: usize },

    /// A prompt bank with no prompts.
    #[error("prompt bank contains no prompts")]
    EmptyPromptBank,

    /// A session configured with zero rounds, or more than the counter can hold.
    #[error("total rounds must be between 1 and {}", super::config::MAX_TOTAL_ROUNDS)]
    InvalidRoundCount,

    /// Round operation before `start()`.
    #[error("session has not been started")]
    NotStarted,

    /// Setup operation after `start()`.
    #[error("session has already started")]
    AlreadyStarted,

    /// Round operation after the last round.
    #[error("game is over")]
    GameOver,

    /// The round was scored once already.
    #[error("round {0} has already been scored")]
    AlreadyScored(u32),

    /// Advancing past a round that was never scored.
    #[error("round {0} has not been scored yet")]
    RoundNotScored(u32),

    /// Snapshot contents contradict each other.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("failed to read prompt bank: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid session config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

impl GameError {
    /// Returns `true` if the error reports a violated game rule rather than
    /// a loading or encoding failure.
    pub fn is_precondition(&self) -> bool {
        !matches!(
            self,
            GameError::Io(_) | GameError::Config(_) | GameError::Json(_) | GameError::Encoding(_)
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

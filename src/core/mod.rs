//! Core types: participants, scores, configuration and errors.
//!
//! These are shared by the tally and session layers and carry no game
//! flow of their own.

pub mod config;
pub mod error;
pub mod player;
pub mod scoreboard;

pub use config::{SessionConfig, DEFAULT_MIN_PLAYERS, DEFAULT_TOTAL_ROUNDS, MAX_TOTAL_ROUNDS};
pub use error::{GameError, Result};
pub use player::ParticipantId;
pub use scoreboard::Scoreboard;

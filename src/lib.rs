//! # herd-tally
//!
//! Scoring and round sequencing for a "herd mentality" party quiz.
//!
//! Players answer open-ended prompts. Everyone who gave the most common
//! answer to a prompt scores a point. Answers are compared by exact text.
//!
//! ## Design Principles
//!
//! 1. **Core without I/O**: every operation is an in-memory mutation. Page
//!    rendering, input collection and storage belong to the caller.
//!
//! 2. **Observable order**: answers and participants keep their insertion
//!    order, because ties are broken by it.
//!
//! 3. **Rebuildable**: a session can be saved as a `SessionSnapshot` and
//!    rebuilt by replaying registration, advancement and answers.
//!
//! ## Modules
//!
//! - `core`: Participant IDs, scoreboard, configuration, errors
//! - `tally`: Per-prompt answer tallies and the prompt bank
//! - `session`: Round sequencer, game driver, standings, snapshots
//!
//! ## Concurrency
//!
//! Single-threaded and synchronous. Callers sharing a session between
//! threads must serialize access themselves.

pub mod core;
pub mod session;
pub mod tally;

// Re-export commonly used types
pub use crate::core::{
    GameError, ParticipantId, Result, Scoreboard, SessionConfig,
    DEFAULT_MIN_PLAYERS, DEFAULT_TOTAL_ROUNDS, MAX_TOTAL_ROUNDS,
};

pub use crate::tally::{PromptBank, PromptTally, DEFAULT_PROMPTS};

pub use crate::session::{
    FinalStandings, GameOutcome, GameSession, RoundResult, RoundSequencer,
    SessionPhase, SessionSnapshot, Winners,
};

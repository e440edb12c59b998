//! Session flow: round sequencing, the game driver, standings and
//! save/restore.

pub mod game;
pub mod sequencer;
pub mod snapshot;
pub mod standings;

pub use game::{GameSession, RoundResult, SessionPhase};
pub use sequencer::RoundSequencer;
pub use snapshot::SessionSnapshot;
pub use standings::{FinalStandings, GameOutcome, Winners};

//! Cumulative per-participant scores.
//!
//! ## Scoreboard
//!
//! Ordered participant → score mapping. Entries keep registration order,
//! which is the order results are displayed and ties are listed in.
//!
//! Backed by `im` persistent collections, so cloning is O(1) and a clone
//! never observes later mutation of the original. `RoundSequencer::scores()`
//! relies on this to hand out snapshots.

use im::{HashMap as ImHashMap, Vector};
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::ParticipantId;

/// Ordered participant → score mapping with cheap snapshots.
///
/// ```
/// use herd_tally::core::Scoreboard;
///
/// let mut scores = Scoreboard::new();
/// scores.register("Alice");
/// scores.register("Bob");
///
/// scores.award("Alice", 1);
/// let snapshot = scores.clone();
/// scores.award("Alice", 1);
///
/// assert_eq!(scores.get("Alice"), Some(2));
/// assert_eq!(snapshot.get("Alice"), Some(1));
/// assert_eq!(scores.get("Carol"), None);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(
    into = "Vec<(ParticipantId, u32)>",
    try_from = "Vec<(ParticipantId, u32)>"
)]
pub struct Scoreboard {
    entries: Vector<(ParticipantId, u32)>,
    index: ImHashMap<ParticipantId, usize>,
}

impl Scoreboard {
    /// Create an empty scoreboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant with a score of 0.
    ///
    /// Returns `false` (and leaves the score untouched) if the participant
    /// is already present.
    pub fn register(&mut self, participant: impl Into<ParticipantId>) -> bool {
        let participant = participant.into();
        if self.index.contains_key(&participant) {
            return false;
        }
        self.index.insert(participant.clone(), self.entries.len());
        self.entries.push_back((participant, 0));
        true
    }

    /// Check if a participant is present.
    #[must_use]
    pub fn contains(&self, participant: &str) -> bool {
        self.index.contains_key(participant)
    }

    /// Get a participant's score.
    #[must_use]
    pub fn get(&self, participant: &str) -> Option<u32> {
        let slot = *self.index.get(participant)?;
        self.entries.get(slot).map(|(_, score)| *score)
    }

    /// Add `points` to a participant's score, returning the new total.
    ///
    /// Returns `None` for unknown participants.
    pub fn award(&mut self, participant: &str, points: u32) -> Option<u32> {
        let slot = *self.index.get(participant)?;
        let entry = self.entries.get_mut(slot)?;
        entry.1 = entry.1.saturating_add(points);
        Some(entry.1)
    }

    /// Overwrite a participant's score.
    ///
    /// Returns `false` for unknown participants.
    pub fn set(&mut self, participant: &str, score: u32) -> bool {
        let Some(&slot) = self.index.get(participant) else {
            return false;
        };
        match self.entries.get_mut(slot) {
            Some(entry) => {
                entry.1 = score;
                true
            }
            None => false,
        }
    }

    /// Number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no participants are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(participant, score)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, u32)> {
        self.entries.iter().map(|(participant, score)| (participant, *score))
    }

    /// Iterate over participants in registration order.
    pub fn participants(&self) -> impl Iterator<Item = &ParticipantId> {
        self.entries.iter().map(|(participant, _)| participant)
    }

    /// Highest score on the board, `None` when empty.
    #[must_use]
    pub fn max_score(&self) -> Option<u32> {
        self.entries.iter().map(|(_, score)| *score).max()
    }

    /// Participants sharing the highest score, in registration order.
    #[must_use]
    pub fn leaders(&self) -> Vec<ParticipantId> {
        let Some(top) = self.max_score() else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|(_, score)| *score == top)
            .map(|(participant, _)| participant.clone())
            .collect()
    }
}

impl PartialEq for Scoreboard {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Scoreboard {}

impl From<Scoreboard> for Vec<(ParticipantId, u32)> {
    fn from(board: Scoreboard) -> Self {
        board.entries.into_iter().collect()
    }
}

impl TryFrom<Vec<(ParticipantId, u32)>> for Scoreboard {
    type Error = GameError;

    fn try_from(entries: Vec<(ParticipantId, u32)>) -> Result<Self, Self::Error> {
        let mut board = Scoreboard::new();
        for (participant, score) in entries {
            if !board.register(participant.clone()) {
                return Err(GameError::InvalidSnapshot(format!(
                    "participant '{participant}' listed twice in scores"
                )));
            }
            board.set(participant.as_str(), score);
        }
        Ok(board)
    }
}

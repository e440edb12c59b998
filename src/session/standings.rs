//! Final standings and overall winners.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ParticipantId, Scoreboard};

/// Overall winners. Usually one or two, so kept inline.
pub type Winners = SmallVec<[ParticipantId; 4]>;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// Single winner.
    Winner(ParticipantId),
    /// Several participants share the top score.
    Tie(Winners),
    /// Nobody registered.
    NoParticipants,
}

/// Ranked final scores with tie-aware winners.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalStandings {
    /// `(participant, score)` by descending score; equal scores keep
    /// registration order.
    pub ranking: Vec<(ParticipantId, u32)>,

    /// Every participant holding the top score.
    pub winners: Winners,

    /// The top score, 0 for an empty board.
    pub winner_score: u32,
}

impl FinalStandings {
    /// Rank a scoreboard.
    #[must_use]
    pub fn from_scores(scores: &Scoreboard) -> Self {
        let mut ranking: Vec<(ParticipantId, u32)> = scores
            .iter()
            .map(|(participant, score)| (participant.clone(), score))
            .collect();
        // Stable, so ties stay in registration order.
        ranking.sort_by(|a, b| b.1.cmp(&a.1));

        let winner_score = scores.max_score().unwrap_or(0);
        let winners = ranking
            .iter()
            .take_while(|(_, score)| *score == winner_score)
            .map(|(participant, _)| participant.clone())
            .collect();

        Self {
            ranking,
            winners,
            winner_score,
        }
    }

    /// Check if more than one participant shares the top score.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }

    /// Check if a participant is among the winners.
    #[must_use]
    pub fn is_winner(&self, participant: &str) -> bool {
        self.winners.iter().any(|w| w == participant)
    }

    /// Summarize the standings as an outcome.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        match self.winners.len() {
            0 => GameOutcome::NoParticipants,
            1 => GameOutcome::Winner(self.winners[0].clone()),
            _ => GameOutcome::Tie(self.winners.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(&str, u32)]) -> Scoreboard {
        let mut board = Scoreboard::new();
        for (name, score) in entries {
            board.register(*name);
            board.set(name, *score);
        }
        board
    }

    #[test]
    fn test_single_winner() {
        let standings = FinalStandings::from_scores(&scores(&[("Alice", 1), ("Bob", 3), ("Charlie", 2)]));

        let order: Vec<_> = standings.ranking.iter().map(|(p, s)| (p.as_str(), *s)).collect();
        assert_eq!(order, vec![("Bob", 3), ("Charlie", 2), ("Alice", 1)]);
        assert_eq!(standings.winner_score, 3);
        assert!(!standings.is_tie());
        assert!(standings.is_winner("Bob"));
        assert_eq!(standings.outcome(), GameOutcome::Winner(ParticipantId::new("Bob")));
    }

    #[test]
    fn test_tie() {
        let standings = FinalStandings::from_scores(&scores(&[("Alice", 2), ("Bob", 1), ("Charlie", 2)]));

        assert!(standings.is_tie());
        assert_eq!(standings.winners.as_slice(), &[ParticipantId::new("Alice"), ParticipantId::new("Charlie")]);
        assert!(!standings.is_winner("Bob"));
        assert!(matches!(standings.outcome(), GameOutcome::Tie(ref w) if w.len() == 2));
    }

    #[test]
    fn test_all_zero_is_a_full_tie() {
        let standings = FinalStandings::from_scores(&scores(&[("Alice", 0), ("Bob", 0)]));
        assert_eq!(standings.winner_score, 0);
        assert_eq!(standings.winners.len(), 2);
    }

    #[test]
    fn test_empty_board() {
        let standings = FinalStandings::from_scores(&Scoreboard::new());
        assert!(standings.ranking.is_empty());
        assert!(standings.winners.is_empty());
        assert_eq!(standings.winner_score, 0);
        assert_eq!(standings.outcome(), GameOutcome::NoParticipants);
    }
}

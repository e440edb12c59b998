//! Round sequencing.
//!
//! `RoundSequencer` owns the prompt list, the active prompt pointer, the
//! registered participants and their cumulative scores. All answer counting
//! is delegated to the active `PromptTally`.
//!
//! ## Flow
//!
//! ```text
//! Idle --start_session--> Active
//! Active: submit_answer* -> score_current_prompt -> advance -> ...
//! ```
//!
//! There is no terminal state here. The caller decides when to stop
//! advancing; `GameSession` does this with a round counter.

use tracing::{debug, info, warn};

use crate::core::{GameError, ParticipantId, Result, Scoreboard, DEFAULT_MIN_PLAYERS};
use crate::tally::{PromptBank, PromptTally};

/// Prompt list, participants and scores for one session.
///
/// ```
/// use herd_tally::session::RoundSequencer;
///
/// let mut rounds = RoundSequencer::new();
/// for name in ["Alice", "Bob", "Charlie"] {
///     rounds.register_participant(name);
/// }
/// rounds.start_session(3).unwrap();
///
/// rounds.submit_answer("Alice", "TypeScript").unwrap();
/// rounds.submit_answer("Bob", "JavaScript").unwrap();
/// rounds.submit_answer("Charlie", "TypeScript").unwrap();
///
/// assert_eq!(rounds.score_current_prompt(), vec!["Alice", "Charlie"]);
/// assert_eq!(rounds.scores().get("Alice"), Some(1));
/// assert_eq!(rounds.scores().get("Bob"), Some(0));
/// ```
#[derive(Clone, Debug)]
pub struct RoundSequencer {
    /// Never empty.
    prompts: Vec<PromptTally>,
    active_index: usize,
    /// Keys are exactly the registered participants.
    scores: Scoreboard,
}

impl RoundSequencer {
    /// Create a sequencer over the built-in prompt bank.
    #[must_use]
    pub fn new() -> Self {
        Self::from_tallies(PromptBank::builtin().tallies())
    }

    /// Create a sequencer over a custom prompt bank.
    pub fn with_prompts(bank: &PromptBank) -> Result<Self> {
        if bank.is_empty() {
            return Err(GameError::EmptyPromptBank);
        }
        Ok(Self::from_tallies(bank.tallies()))
    }

    fn from_tallies(prompts: Vec<PromptTally>) -> Self {
        debug_assert!(!prompts.is_empty(), "prompt list must not be empty");
        Self {
            prompts,
            active_index: 0,
            scores: Scoreboard::new(),
        }
    }

    // === Participants ===

    /// Register a participant with a score of 0.
    ///
    /// Idempotent: registering an existing name keeps its score. Returns
    /// `true` if the participant was newly added.
    pub fn register_participant(&mut self, name: impl Into<ParticipantId>) -> bool {
        let name = name.into();
        let added = self.scores.register(name.clone());
        if added {
            debug!(participant = %name, "registered participant");
        }
        added
    }

    /// Check if a participant is registered.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.scores.contains(name)
    }

    /// Registered participants in registration order.
    pub fn participants(&self) -> impl Iterator<Item = &ParticipantId> {
        self.scores.participants()
    }

    /// Number of registered participants.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.scores.len()
    }

    /// Gate for leaving the idle state.
    ///
    /// Fails with `InsufficientPlayers` if fewer than `min_players` are
    /// registered. Changes nothing either way.
    pub fn start_session(&self, min_players: usize) -> Result<()> {
        let actual = self.participant_count();
        if actual < min_players {
            warn!(required = min_players, actual, "not enough participants to start");
            return Err(GameError::InsufficientPlayers {
                required: min_players,
                actual,
            });
        }
        info!(participants = actual, "session started");
        Ok(())
    }

    /// `start_session` with the default minimum of three participants.
    pub fn start_session_default(&self) -> Result<()> {
        self.start_session(DEFAULT_MIN_PLAYERS)
    }

    // === Prompts ===

    /// The active prompt.
    #[must_use]
    pub fn current_prompt(&self) -> &PromptTally {
        &self.prompts[self.active_index]
    }

    /// Index of the active prompt.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Number of prompts.
    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }

    /// Move to the next prompt, wrapping to the first after the last.
    ///
    /// Does not check whether the active prompt was scored.
    pub fn advance(&mut self) {
        self.active_index = (self.active_index + 1) % self.prompts.len();
        debug!(active_index = self.active_index, "advanced to next prompt");
    }

    /// Forget the active prompt's answers.
    ///
    /// Used when a wrapped-around sequence revisits a prompt.
    pub fn clear_current_answers(&mut self) {
        self.prompts[self.active_index].clear_answers();
    }

    // === Answers and scoring ===

    /// Record an answer on the active prompt.
    ///
    /// Fails with `NotRegistered` for unknown participants.
    pub fn submit_answer(
        &mut self,
        participant: impl Into<ParticipantId>,
        answer: impl Into<String>,
    ) -> Result<()> {
        let participant = participant.into();
        if !self.scores.contains(participant.as_str()) {
            warn!(participant = %participant, "answer from unregistered participant");
            return Err(GameError::NotRegistered(participant));
        }

        debug!(participant = %participant, active_index = self.active_index, "answer submitted");
        self.prompts[self.active_index].add_answer(participant, answer);
        Ok(())
    }

    /// Award one point to everyone who gave the plurality answer on the
    /// active prompt, and return them in submission order.
    ///
    /// Each call awards again: scoring the same prompt twice double-counts.
    pub fn score_current_prompt(&mut self) -> Vec<ParticipantId> {
        let winners = self.current_prompt().players_with_most_common_answer();
        for participant in &winners {
            self.scores.award(participant.as_str(), 1);
        }

        info!(
            active_index = self.active_index,
            answer = self.current_prompt().most_common_answer(),
            winners = winners.len(),
            "scored prompt"
        );
        winners
    }

    /// Snapshot of the current scores.
    ///
    /// The returned board is independent: mutating it never touches the
    /// sequencer, and later scoring never shows up in it.
    #[must_use]
    pub fn scores(&self) -> Scoreboard {
        self.scores.clone()
    }

    /// Restore a participant's score. Used when rebuilding from a snapshot.
    pub(crate) fn set_score(&mut self, participant: &str, score: u32) -> bool {
        self.scores.set(participant, score)
    }
}

impl Default for RoundSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_players() -> RoundSequencer {
        let mut rounds = RoundSequencer::new();
        rounds.register_participant("Alice");
        rounds.register_participant("Bob");
        rounds.register_participant("Charlie");
        rounds
    }

    #[test]
    fn test_fresh_sequencer() {
        let rounds = RoundSequencer::new();
        assert_eq!(rounds.active_index(), 0);
        assert_eq!(rounds.prompt_count(), 20);
        assert!(rounds.current_prompt().is_empty());
        assert_eq!(rounds.participant_count(), 0);
    }

    #[test]
    fn test_custom_prompts() {
        let bank = PromptBank::new(["one", "two"]).unwrap();
        let rounds = RoundSequencer::with_prompts(&bank).unwrap();
        assert_eq!(rounds.prompt_count(), 2);
        assert_eq!(rounds.current_prompt().text(), "one");
    }

    #[test]
    fn test_empty_bank_rejected() {
        let bank: PromptBank = serde_json::from_str("[]").unwrap();
        assert!(matches!(
            RoundSequencer::with_prompts(&bank),
            Err(GameError::EmptyPromptBank)
        ));
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut rounds = three_players();
        rounds.submit_answer("Alice", "x").unwrap();
        rounds.submit_answer("Bob", "x").unwrap();
        rounds.score_current_prompt();

        assert!(!rounds.register_participant("Alice"));
        assert_eq!(rounds.scores().get("Alice"), Some(1));
        assert_eq!(rounds.participant_count(), 3);
    }

    #[test]
    fn test_submit_unregistered() {
        let mut rounds = three_players();
        let err = rounds.submit_answer("Mallory", "anything").unwrap_err();
        assert!(matches!(err, GameError::NotRegistered(ref p) if p == "Mallory"));
        assert!(rounds.current_prompt().is_empty());
    }

    #[test]
    fn test_submit_goes_to_active_prompt() {
        let mut rounds = three_players();
        rounds.advance();
        rounds.submit_answer("Bob", "gdb").unwrap();

        assert_eq!(rounds.current_prompt().answer_of("Bob"), Some("gdb"));
        assert_eq!(rounds.prompts[0].len(), 0);
    }

    #[test]
    fn test_advance_wraps() {
        let bank = PromptBank::new(["a", "b", "c"]).unwrap();
        let mut rounds = RoundSequencer::with_prompts(&bank).unwrap();

        rounds.advance();
        rounds.advance();
        assert_eq!(rounds.active_index(), 2);
        rounds.advance();
        assert_eq!(rounds.active_index(), 0);
        assert_eq!(rounds.current_prompt().text(), "a");
    }

    #[test]
    fn test_score_current_prompt() {
        let mut rounds = three_players();
        rounds.submit_answer("Alice", "TypeScript").unwrap();
        rounds.submit_answer("Bob", "JavaScript").unwrap();
        rounds.submit_answer("Charlie", "TypeScript").unwrap();

        let winners = rounds.score_current_prompt();
        assert_eq!(winners, vec!["Alice", "Charlie"]);

        let scores = rounds.scores();
        assert_eq!(scores.get("Alice"), Some(1));
        assert_eq!(scores.get("Bob"), Some(0));
        assert_eq!(scores.get("Charlie"), Some(1));
    }

    #[test]
    fn test_scoring_twice_double_counts() {
        let mut rounds = three_players();
        rounds.submit_answer("Alice", "x").unwrap();
        rounds.score_current_prompt();
        rounds.score_current_prompt();
        assert_eq!(rounds.scores().get("Alice"), Some(2));
    }

    #[test]
    fn test_score_with_no_answers() {
        let mut rounds = three_players();
        assert!(rounds.score_current_prompt().is_empty());
        assert!(rounds.scores().iter().all(|(_, s)| s == 0));
    }

    #[test]
    fn test_scores_snapshot() {
        let mut rounds = three_players();
        let before = rounds.scores();

        rounds.submit_answer("Alice", "x").unwrap();
        rounds.score_current_prompt();

        assert_eq!(before.get("Alice"), Some(0));

        let mut copy = rounds.scores();
        copy.award("Bob", 10);
        assert_eq!(rounds.scores().get("Bob"), Some(0));
    }

    #[test]
    fn test_start_session_gate() {
        let mut rounds = RoundSequencer::new();
        rounds.register_participant("Alice");
        rounds.register_participant("Bob");

        let err = rounds.start_session(3).unwrap_err();
        assert!(matches!(err, GameError::InsufficientPlayers { required: 3, actual: 2 }));
        assert!(rounds.start_session_default().is_err());

        rounds.register_participant("Charlie");
        assert!(rounds.start_session(3).is_ok());
        assert!(rounds.start_session_default().is_ok());
        assert_eq!(rounds.active_index(), 0);
    }

    #[test]
    fn test_clear_current_answers() {
        let mut rounds = three_players();
        rounds.submit_answer("Alice", "x").unwrap();
        rounds.clear_current_answers();
        assert!(rounds.current_prompt().is_empty());
    }
}

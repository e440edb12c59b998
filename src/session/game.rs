//! Game session driver.
//!
//! `GameSession` wraps a `RoundSequencer` with the parts a full game needs
//! on top of it: a round counter, a fixed number of rounds, one scoring
//! per round, per-round results and final standings.
//!
//! ## Phases
//!
//! ```text
//! Setup --start--> Playing --(next_round past the last round)--> Finished
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::sequencer::RoundSequencer;
use super::standings::FinalStandings;
use crate::core::{GameError, ParticipantId, Result, Scoreboard, SessionConfig};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Participants are being added.
    Setup,
    /// Rounds are being played.
    Playing,
    /// All rounds have been played.
    Finished,
}

/// Outcome of one scored round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Round number (starts at 1).
    pub round: u32,

    /// Prompt text.
    pub prompt: String,

    /// Plurality answer, `""` if nobody answered.
    pub most_common: String,

    /// Participants who gave the plurality answer and scored a point.
    pub winners: Vec<ParticipantId>,

    /// Every answer in submission order.
    pub answers: Vec<(ParticipantId, String)>,

    /// Scores after this round.
    pub scores: Scoreboard,
}

/// A complete game of a fixed number of rounds.
///
/// ```
/// use herd_tally::core::SessionConfig;
/// use herd_tally::session::GameSession;
///
/// let mut game = GameSession::new(SessionConfig::new().with_total_rounds(1)).unwrap();
/// for name in ["Alice", "Bob", "Charlie"] {
///     game.add_player(name).unwrap();
/// }
/// game.start().unwrap();
///
/// let result = game
///     .submit_answers([("Alice", "Rust"), ("Bob", "Rust"), ("Charlie", "Go")])
///     .unwrap();
/// assert_eq!(result.most_common, "Rust");
///
/// game.next_round().unwrap();
/// assert!(game.is_game_over());
/// assert!(game.final_standings().is_tie());
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(crate) config: SessionConfig,
    pub(crate) sequencer: RoundSequencer,
    pub(crate) phase: SessionPhase,
    /// 0 during setup, then 1-based; `total_rounds + 1` once finished.
    pub(crate) current_round: u32,
    pub(crate) scored: bool,
    pub(crate) last_result: Option<RoundResult>,
}

impl GameSession {
    /// Create a session in the setup phase.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let sequencer = RoundSequencer::with_prompts(&config.prompts)?;
        Ok(Self {
            config,
            sequencer,
            phase: SessionPhase::Setup,
            current_round: 0,
            scored: false,
            last_result: None,
        })
    }

    /// The session's configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The underlying sequencer.
    #[must_use]
    pub fn sequencer(&self) -> &RoundSequencer {
        &self.sequencer
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Current round number, 0 before `start()`.
    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Rounds in this game.
    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.config.total_rounds
    }

    /// Text of the prompt for the current round.
    #[must_use]
    pub fn current_prompt_text(&self) -> &str {
        self.sequencer.current_prompt().text()
    }

    /// Check if the current round has been scored.
    #[must_use]
    pub fn is_round_scored(&self) -> bool {
        self.scored
    }

    /// Check if all rounds have been played.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    /// Result of the current round, once scored.
    #[must_use]
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Current scores.
    #[must_use]
    pub fn scores(&self) -> Scoreboard {
        self.sequencer.scores()
    }

    /// Add a participant during setup.
    ///
    /// The name is trimmed; blank names are ignored. Returns `true` if a
    /// new participant was added.
    pub fn add_player(&mut self, name: &str) -> Result<bool> {
        if self.phase != SessionPhase::Setup {
            return Err(GameError::AlreadyStarted);
        }
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }
        Ok(self.sequencer.register_participant(name))
    }

    /// Leave setup and begin round 1.
    ///
    /// Fails with `InsufficientPlayers` below the configured minimum.
    pub fn start(&mut self) -> Result<()> {
        if self.phase != SessionPhase::Setup {
            return Err(GameError::AlreadyStarted);
        }
        self.sequencer.start_session(self.config.min_players)?;
        self.phase = SessionPhase::Playing;
        self.current_round = 1;
        info!(total_rounds = self.config.total_rounds, "game started");
        Ok(())
    }

    /// Record one answer for the current round.
    ///
    /// The answer is trimmed; a blank answer is skipped and returns
    /// `Ok(false)`. Skipping does not withdraw an earlier answer: the
    /// participant's previous non-blank answer for this round stays recorded.
    pub fn submit_answer(&mut self, participant: impl Into<ParticipantId>, answer: &str) -> Result<bool> {
        self.ensure_open_round()?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(false);
        }
        self.sequencer.submit_answer(participant, answer)?;
        Ok(true)
    }

    /// Score the current round. Allowed once per round.
    pub fn score_round(&mut self) -> Result<&RoundResult> {
        self.ensure_open_round()?;
        self.sequencer.score_current_prompt();
        self.scored = true;
        let result = self.round_result();
        info!(round = result.round, winners = result.winners.len(), "round scored");
        let result: &RoundResult = self.last_result.insert(result);
        Ok(result)
    }

    /// Submit a batch of answers and score the round.
    ///
    /// Every participant with a non-blank answer is checked before anything
    /// is recorded, so an unregistered name leaves the round untouched.
    pub fn submit_answers<I, P, A>(&mut self, answers: I) -> Result<&RoundResult>
    where
        I: IntoIterator<Item = (P, A)>,
        P: Into<ParticipantId>,
        A: AsRef<str>,
    {
        self.ensure_open_round()?;

        let mut batch: Vec<(ParticipantId, String)> = Vec::new();
        for (participant, answer) in answers {
            let participant = participant.into();
            let answer = answer.as_ref().trim();
            if answer.is_empty() {
                debug!(participant = %participant, "skipping blank answer");
                continue;
            }
            if !self.sequencer.is_registered(participant.as_str()) {
                warn!(participant = %participant, "rejecting batch with unregistered participant");
                return Err(GameError::NotRegistered(participant));
            }
            batch.push((participant, answer.to_owned()));
        }

        for (participant, answer) in batch {
            self.sequencer.submit_answer(participant, answer)?;
        }
        self.score_round()
    }

    /// Move to the next round, or finish after the last one.
    ///
    /// The current round must have been scored.
    pub fn next_round(&mut self) -> Result<()> {
        self.ensure_playing()?;
        if !self.scored {
            return Err(GameError::RoundNotScored(self.current_round));
        }

        self.sequencer.advance();
        self.current_round += 1;
        self.scored = false;
        self.last_result = None;

        if self.current_round > self.config.total_rounds {
            self.phase = SessionPhase::Finished;
            info!(rounds = self.config.total_rounds, "game over");
        } else if self.current_round as usize > self.sequencer.prompt_count() {
            // Wrapped around: this prompt still holds an earlier round's answers.
            self.sequencer.clear_current_answers();
        }
        Ok(())
    }

    /// Ranked scores and tie-aware winners.
    #[must_use]
    pub fn final_standings(&self) -> FinalStandings {
        FinalStandings::from_scores(&self.sequencer.scores())
    }

    /// Build the result for the current round from the sequencer's state.
    pub(crate) fn round_result(&self) -> RoundResult {
        let prompt = self.sequencer.current_prompt();
        RoundResult {
            round: self.current_round,
            prompt: prompt.text().to_owned(),
            most_common: prompt.most_common_answer().to_owned(),
            winners: prompt.players_with_most_common_answer(),
            answers: prompt
                .answers()
                .map(|(participant, answer)| (participant.clone(), answer.to_owned()))
                .collect(),
            scores: self.sequencer.scores(),
        }
    }

    fn ensure_playing(&self) -> Result<()> {
        match self.phase {
            SessionPhase::Setup => Err(GameError::NotStarted),
            SessionPhase::Playing => Ok(()),
            SessionPhase::Finished => Err(GameError::GameOver),
        }
    }

    fn ensure_open_round(&self) -> Result<()> {
        self.ensure_playing()?;
        if self.scored {
            warn!(round = self.current_round, "round already scored");
            return Err(GameError::AlreadyScored(self.current_round));
        }
        Ok(())
    }
}

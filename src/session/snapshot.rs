//! Save and restore for sessions that outlive a single caller.
//!
//! The core holds no durable storage. A caller that rebuilds the game
//! between independent requests or screen loads saves a `SessionSnapshot`
//! and later restores from it. Restoring replays the same operations a
//! live session went through:
//!
//! 1. register every participant,
//! 2. put back the scores,
//! 3. call `advance()` once per finished round, modulo the prompt count,
//! 4. re-inject the current round's answers.
//!
//! Snapshots encode to JSON (`serde_json`) or compact binary (`bincode`).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::game::{GameSession, SessionPhase};
use crate::core::{GameError, ParticipantId, Result, Scoreboard, SessionConfig, MAX_TOTAL_ROUNDS};

/// Everything needed to rebuild a `GameSession`.
///
/// The prompt bank is not part of the snapshot; restore with the same
/// config the session was created with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Participants in registration order.
    pub participants: Vec<ParticipantId>,

    pub phase: SessionPhase,

    pub current_round: u32,

    pub total_rounds: u32,

    /// Scores so far. Participants missing here restore with 0.
    pub scores: Scoreboard,

    /// Answers for the current round, in submission order.
    pub answers: Vec<(ParticipantId, String)>,

    /// Whether the current round has been scored.
    pub scored: bool,
}

impl SessionSnapshot {
    /// Check that the snapshot describes a reachable session state.
    pub fn validate(&self) -> Result<()> {
        if self.total_rounds == 0 || self.total_rounds > MAX_TOTAL_ROUNDS {
            return Err(invalid(&format!(
                "total_rounds {} is outside 1..={MAX_TOTAL_ROUNDS}",
                self.total_rounds
            )));
        }

        match self.phase {
            SessionPhase::Setup => {
                if self.current_round != 0 || self.scored || !self.answers.is_empty() {
                    return Err(invalid("setup snapshot must have no round state"));
                }
            }
            SessionPhase::Playing => {
                if self.current_round == 0 || self.current_round > self.total_rounds {
                    return Err(invalid(&format!(
                        "round {} is outside 1..={}",
                        self.current_round, self.total_rounds
                    )));
                }
            }
            SessionPhase::Finished => {
                let past_last = self.total_rounds.checked_add(1) == Some(self.current_round);
                if !past_last || self.scored || !self.answers.is_empty() {
                    return Err(invalid("finished snapshot must be past the last round"));
                }
            }
        }

        let mut seen = Scoreboard::new();
        for participant in &self.participants {
            if !seen.register(participant.clone()) {
                return Err(invalid(&format!("participant '{participant}' listed twice")));
            }
        }
        if let Some((participant, _)) = self.scores.iter().find(|(p, _)| !seen.contains(p.as_str())) {
            return Err(invalid(&format!("score for unknown participant '{participant}'")));
        }
        if let Some((participant, _)) = self.answers.iter().find(|(p, _)| !seen.contains(p.as_str())) {
            return Err(invalid(&format!("answer from unknown participant '{participant}'")));
        }

        Ok(())
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Encode as bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

fn invalid(reason: &str) -> GameError {
    GameError::InvalidSnapshot(reason.to_owned())
}

impl GameSession {
    /// Capture the session's state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let answers = match self.phase {
            SessionPhase::Playing => self
                .sequencer
                .current_prompt()
                .answers()
                .map(|(participant, answer)| (participant.clone(), answer.to_owned()))
                .collect(),
            SessionPhase::Setup | SessionPhase::Finished => Vec::new(),
        };

        SessionSnapshot {
            participants: self.sequencer.participants().cloned().collect(),
            phase: self.phase,
            current_round: self.current_round,
            total_rounds: self.config.total_rounds,
            scores: self.sequencer.scores(),
            answers,
            scored: self.scored,
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// `config` supplies the prompt bank and minimum player count; the
    /// snapshot's round count replaces the config's.
    pub fn restore(config: SessionConfig, snapshot: SessionSnapshot) -> Result<Self> {
        snapshot.validate()?;

        let config = config.with_total_rounds(snapshot.total_rounds);
        let mut session = GameSession::new(config)?;

        for participant in &snapshot.participants {
            session.sequencer.register_participant(participant);
        }
        for (participant, score) in snapshot.scores.iter() {
            session.sequencer.set_score(participant.as_str(), score);
        }

        // The prompt index repeats every `prompt_count` rounds.
        let finished = snapshot.current_round.saturating_sub(1) as usize;
        for _ in 0..finished % session.sequencer.prompt_count() {
            session.sequencer.advance();
        }
        for (participant, answer) in snapshot.answers {
            session.sequencer.submit_answer(participant, answer)?;
        }

        session.phase = snapshot.phase;
        session.current_round = snapshot.current_round;
        session.scored = snapshot.scored;
        if session.scored {
            session.last_result = Some(session.round_result());
        }

        debug!(
            round = session.current_round,
            participants = session.sequencer.participant_count(),
            "restored session"
        );
        Ok(session)
    }
}

//! Single-prompt answer tally.
//!
//! A `PromptTally` holds one prompt's text and the answers participants
//! submitted for it, and works out which answer the herd converged on.
//!
//! ## Ordering
//!
//! Answers are stored in first-submission order. Re-submitting overwrites
//! the answer in place, so a participant keeps its original position. Both
//! the tie-break in `most_common_answer` and the order of
//! `players_with_most_common_answer` depend on this order.

use rustc_hash::FxHashMap;

use crate::core::ParticipantId;

/// Answers collected for one prompt.
///
/// ```
/// use herd_tally::tally::PromptTally;
///
/// let mut prompt = PromptTally::new("What's your favorite programming language?");
/// prompt.add_answer("Alice", "TypeScript");
/// prompt.add_answer("Bob", "JavaScript");
/// prompt.add_answer("Charlie", "TypeScript");
///
/// assert_eq!(prompt.most_common_answer(), "TypeScript");
/// assert_eq!(prompt.players_with_most_common_answer(), vec!["Alice", "Charlie"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptTally {
    text: String,
    answers: Vec<(ParticipantId, String)>,
    /// Participant → position in `answers`.
    slots: FxHashMap<ParticipantId, usize>,
}

impl PromptTally {
    /// Create a tally with no answers.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            answers: Vec::new(),
            slots: FxHashMap::default(),
        }
    }

    /// The prompt text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record `answer` for `participant`, replacing any earlier answer.
    ///
    /// No identity check happens here; `RoundSequencer` owns registration.
    pub fn add_answer(&mut self, participant: impl Into<ParticipantId>, answer: impl Into<String>) {
        let participant = participant.into();
        let answer = answer.into();
        match self.slots.get(&participant) {
            Some(&slot) => self.answers[slot].1 = answer,
            None => {
                self.slots.insert(participant.clone(), self.answers.len());
                self.answers.push((participant, answer));
            }
        }
    }

    /// The answer a participant submitted, if any.
    #[must_use]
    pub fn answer_of(&self, participant: &str) -> Option<&str> {
        let slot = *self.slots.get(participant)?;
        Some(self.answers[slot].1.as_str())
    }

    /// Iterate over `(participant, answer)` pairs in submission order.
    pub fn answers(&self) -> impl Iterator<Item = (&ParticipantId, &str)> {
        self.answers.iter().map(|(participant, answer)| (participant, answer.as_str()))
    }

    /// Number of participants who answered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Check if nobody has answered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Drop every recorded answer, keeping the prompt text.
    pub fn clear_answers(&mut self) {
        self.answers.clear();
        self.slots.clear();
    }

    /// Distinct answers with their occurrence counts, in order of first
    /// appearance.
    #[must_use]
    pub fn answer_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut positions: FxHashMap<&str, usize> = FxHashMap::default();

        for (_, answer) in &self.answers {
            match positions.get(answer.as_str()) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    positions.insert(answer.as_str(), counts.len());
                    counts.push((answer.as_str(), 1));
                }
            }
        }

        counts
    }

    /// The plurality answer.
    ///
    /// Ties go to the answer that appeared first: only a strictly greater
    /// count replaces the current leader. Returns `""` when there are no
    /// answers.
    #[must_use]
    pub fn most_common_answer(&self) -> &str {
        let mut leader = "";
        let mut highest = 0;

        for (answer, count) in self.answer_counts() {
            if count > highest {
                leader = answer;
                highest = count;
            }
        }

        leader
    }

    /// Participants whose answer matches `most_common_answer`, in submission
    /// order.
    ///
    /// Empty when the plurality answer is the empty string, so an explicit
    /// `""` answer never scores.
    #[must_use]
    pub fn players_with_most_common_answer(&self) -> Vec<ParticipantId> {
        let most_common = self.most_common_answer();
        if most_common.is_empty() {
            return Vec::new();
        }

        self.answers
            .iter()
            .filter(|(_, answer)| answer == most_common)
            .map(|(participant, _)| participant.clone())
            .collect()
    }
}

//! Round sequencing: registration, submission, scoring and advancement.

use proptest::prelude::*;

use herd_tally::{GameError, PromptBank, RoundSequencer};

fn with_players(names: &[&str]) -> RoundSequencer {
    let mut rounds = RoundSequencer::new();
    for name in names {
        rounds.register_participant(*name);
    }
    rounds
}

/// Three players, one prompt: the two who agree score.
#[test]
fn test_scoring_scenario() {
    let mut rounds = with_players(&["Alice", "Bob", "Charlie"]);
    rounds.submit_answer("Alice", "TypeScript").unwrap();
    rounds.submit_answer("Bob", "JavaScript").unwrap();
    rounds.submit_answer("Charlie", "TypeScript").unwrap();

    assert_eq!(rounds.score_current_prompt(), vec!["Alice", "Charlie"]);

    let scores: Vec<_> = rounds.scores().iter().map(|(p, s)| (p.to_string(), s)).collect();
    assert_eq!(
        scores,
        vec![
            ("Alice".to_string(), 1),
            ("Bob".to_string(), 0),
            ("Charlie".to_string(), 1),
        ]
    );
}

#[test]
fn test_start_session_player_count() {
    let rounds = with_players(&["Alice", "Bob"]);
    assert!(matches!(
        rounds.start_session(3),
        Err(GameError::InsufficientPlayers { required: 3, actual: 2 })
    ));

    let rounds = with_players(&["Alice", "Bob", "Charlie"]);
    assert!(rounds.start_session(3).is_ok());
}

#[test]
fn test_fresh_sequencer_state() {
    let rounds = RoundSequencer::new();
    assert_eq!(rounds.active_index(), 0);
    assert!(rounds.current_prompt().is_empty());
    assert_eq!(rounds.current_prompt().text(), "What's your favorite programming language?");
}

#[test]
fn test_unregistered_participant_rejected() {
    let mut rounds = with_players(&["Alice"]);
    assert!(matches!(
        rounds.submit_answer("Bob", "Rust"),
        Err(GameError::NotRegistered(_))
    ));
}

/// Scores accumulate across prompts; each prompt keeps its own answers.
#[test]
fn test_scores_accumulate_over_rounds() {
    let mut rounds = with_players(&["Alice", "Bob", "Charlie"]);

    let plays = [
        [("Alice", "Rust"), ("Bob", "Rust"), ("Charlie", "Go")],
        [("Alice", "vim"), ("Bob", "emacs"), ("Charlie", "emacs")],
        [("Alice", "printf"), ("Bob", "gdb"), ("Charlie", "printf")],
    ];
    for round in plays {
        for (player, answer) in round {
            rounds.submit_answer(player, answer).unwrap();
        }
        rounds.score_current_prompt();
        rounds.advance();
    }

    let scores = rounds.scores();
    assert_eq!(scores.get("Alice"), Some(2));
    assert_eq!(scores.get("Bob"), Some(2));
    assert_eq!(scores.get("Charlie"), Some(2));
    assert_eq!(rounds.active_index(), 3);
    assert!(rounds.current_prompt().is_empty());
}

proptest! {
    #[test]
    fn prop_advance_wraps_after_full_cycle(start in 0usize..40, prompts in 1usize..8) {
        let bank = PromptBank::new((0..prompts).map(|i| format!("prompt {i}"))).unwrap();
        let mut rounds = RoundSequencer::with_prompts(&bank).unwrap();
        for _ in 0..start {
            rounds.advance();
        }
        let origin = rounds.active_index();
        prop_assert!(origin < prompts);

        for _ in 0..rounds.prompt_count() {
            rounds.advance();
        }
        prop_assert_eq!(rounds.active_index(), origin);
    }

    #[test]
    fn prop_registration_never_resets_score(points in 1u32..5, repeats in 1usize..4) {
        let mut rounds = with_players(&["Alice", "Bob", "Charlie"]);
        for _ in 0..points {
            rounds.submit_answer("Alice", "same").unwrap();
            rounds.score_current_prompt();
        }
        for _ in 0..repeats {
            rounds.register_participant("Alice");
        }
        prop_assert_eq!(rounds.scores().get("Alice"), Some(points));
        prop_assert_eq!(rounds.participant_count(), 3);
    }
}

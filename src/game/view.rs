//! Display Snapshot
//!
//! The session's output surface: one serializable value holding everything
//! the game screen shows, captured from a [`GameSession`] at any moment.
//! Spoilers are structural - the correct answer and the explanation are
//! simply absent from the snapshot until the round locks, so a display
//! layer cannot leak them early even by accident.

use serde::{Deserialize, Serialize};

use crate::game::session::{GameSession, SessionPhase};
use crate::game::stats::TeamScore;
use crate::game::strategy::{Choice, Feedback, Team};

/// The one game activity's display title; anything else gets the generic label.
pub fn game_title(activity_id: &str) -> &'static str {
    if activity_id == "math-fractions-compare-2" {
        "Jeu : comparer des fractions"
    } else {
        "Jeu"
    }
}

/// Display strings for the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    /// Left operand, reduced, as `n/d`
    pub a: String,

    /// Right operand, reduced, as `n/d`
    pub b: String,

    /// Strategy hint, always visible
    pub hint: String,

    /// Correct choice - present only once the round is locked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<Choice>,

    /// Worked explanation - present only once the round is locked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Team block of the snapshot, present only in team mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamView {
    /// Team the next correct answer credits
    pub active: Team,

    /// Per-team scores in declaration order
    pub scores: Vec<TeamScore>,
}

/// Everything the game screen shows, as one serializable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Screen title derived from the activity id
    pub title: String,

    /// Session phase
    pub phase: SessionPhase,

    /// Zero-based index of the current round
    pub round_index: u32,

    /// Configured rounds per session
    pub round_count: u32,

    /// The current round's display strings, absent when idle or finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundView>,

    /// Is the current round resolved and waiting for advance?
    pub locked: bool,

    /// Feedback for the resolved round
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,

    /// Seconds left on the countdown, absent when no timer runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_remaining: Option<u32>,

    /// Correct answers so far
    pub score: u32,

    /// Rounds resolved so far
    pub total_answered: u32,

    /// Current streak of consecutive correct answers
    pub streak: u32,

    /// Whole-percent accuracy so far
    pub accuracy: u32,

    /// Team block, absent outside team mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<TeamView>,

    /// Has the session played all its rounds?
    pub finished: bool,
}

impl SessionView {
    /// Capture a snapshot of the session as it stands.
    pub fn capture(session: &GameSession) -> Self {
        let locked = session.locked();
        let round = session.current_round().map(|round| RoundView {
            a: round.a.to_string(),
            b: round.b.to_string(),
            hint: round.hint.clone(),
            correct: locked.then_some(round.correct),
            explanation: locked.then(|| round.explanation.clone()),
        });
        let teams = session.config().teams_enabled.then(|| TeamView {
            active: session.active_team(),
            scores: crate::game::stats::team_breakdown(session.team_scores()),
        });

        Self {
            title: game_title(&session.config().activity_id).to_string(),
            phase: session.phase(),
            round_index: session.round_index(),
            round_count: session.config().round_count,
            round,
            locked,
            feedback: session.feedback(),
            time_remaining: session.time_remaining(),
            score: session.score(),
            total_answered: session.total_answered(),
            streak: session.current_streak(),
            accuracy: session.accuracy(),
            teams,
            finished: session.phase() == SessionPhase::Finished,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

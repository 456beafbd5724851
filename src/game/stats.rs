//! Session Statistics
//!
//! Derived aggregates over a session's history: accuracy, per-strategy
//! breakdown, best-performing team, and the exportable summary. Everything
//! here is pure arithmetic over counters the session already holds; nothing
//! mutates session state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::strategy::{Choice, Difficulty, Strategy, Team};

// =============================================================================
// ROUND HISTORY
// =============================================================================

/// How a single round resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    /// Answered with the correct choice
    Correct,
    /// Answered with a wrong choice
    Wrong,
    /// Countdown expired before any answer
    TimedOut,
}

/// One resolved round, appended to the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Zero-based index of the round within the session
    pub round_index: u32,

    /// Technique the round exercised
    pub strategy: Strategy,

    /// The submitted choice; `None` on timeout
    pub choice: Option<Choice>,

    /// The answer the comparison yielded
    pub correct: Choice,

    /// How the round resolved
    pub outcome: RoundOutcome,

    /// Active team when the round resolved, on every outcome; `None` outside team mode
    pub team: Option<Team>,
}

// =============================================================================
// DERIVED AGGREGATES
// =============================================================================

/// Accuracy as a whole percentage, rounded to nearest.
///
/// Zero answered rounds is a defined 0, not a division fault.
#[must_use]
pub fn accuracy_percent(score: u32, total_answered: u32) -> u32 {
    if total_answered == 0 {
        return 0;
    }
    let scaled = score as u64 * 100 + total_answered as u64 / 2;
    (scaled / total_answered as u64) as u32
}

/// The leading team and its score.
///
/// `None` when team mode never ran - there is no leader to report. Ties
/// resolve to the first team in declaration order, so an untouched
/// scoreboard reports Team A at zero.
#[must_use]
pub fn best_team(team_scores: &[u32; Team::COUNT], teams_enabled: bool) -> Option<(Team, u32)> {
    if !teams_enabled {
        return None;
    }
    let mut leader = (Team::A, team_scores[Team::A as usize]);
    for team in Team::ALL {
        let score = team_scores[team as usize];
        if score > leader.1 {
            leader = (team, score);
        }
    }
    Some(leader)
}

// =============================================================================
// SUMMARY
// =============================================================================

/// Per-strategy slice of the summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyCount {
    /// The strategy
    pub strategy: Strategy,

    /// Rounds of that strategy the session resolved
    pub count: u32,
}

/// Per-team slice of the summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    /// The team
    pub team: Team,

    /// Correct answers credited to it
    pub score: u32,
}

/// Exportable report over one session.
///
/// Derivable at any point; stable once the session is finished.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Activity the session was labeled with
    pub activity_id: String,

    /// Difficulty the session ran at
    pub difficulty: Difficulty,

    /// Rounds the session was configured for
    pub round_count: u32,

    /// Rounds actually resolved (answered or timed out)
    pub rounds_played: u32,

    /// Correct answers
    pub score: u32,

    /// Whole-percent accuracy over resolved rounds
    pub accuracy: u32,

    /// Correct-answer count (same as `score`, kept for symmetry with the
    /// other two outcome counters)
    pub correct_count: u32,

    /// Wrong-answer count
    pub wrong_count: u32,

    /// Timed-out count
    pub timeout_count: u32,

    /// Longest run of consecutive correct answers
    pub best_streak: u32,

    /// Resolved rounds per strategy, declaration order
    pub strategy_counts: Vec<StrategyCount>,

    /// Team scores, present only when team mode ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_scores: Option<Vec<TeamScore>>,

    /// Leading team, present only when team mode ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_team: Option<Team>,

    /// When the session was started, if it ever was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// Did the session reach its configured round count?
    pub finished: bool,
}

/// Expand a strategy counter array into labeled summary slices.
pub(crate) fn strategy_breakdown(counts: &[u32; Strategy::COUNT]) -> Vec<StrategyCount> {
    Strategy::ALL
        .iter()
        .map(|&strategy| StrategyCount {
            strategy,
            count: counts[strategy as usize],
        })
        .collect()
}

/// Expand a team score array into labeled summary slices.
pub(crate) fn team_breakdown(scores: &[u32; Team::COUNT]) -> Vec<TeamScore> {
    Team::ALL
        .iter()
        .map(|&team| TeamScore {
            team,
            score: scores[team as usize],
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

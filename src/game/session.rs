//! Game Session State Machine
//!
//! One complete play-through of a configured number of rounds. The session
//! owns the RNG, the current round, the countdown token and every counter;
//! it is mutated by exactly one external driver through `&mut self` calls,
//! and nothing here blocks or schedules.
//!
//! ```text
//! ┌──────┐ start ┌─────────────┐ answer / timeout ┌─────────────┐
//! │ Idle ├──────►│ RoundActive ├─────────────────►│ RoundLocked │
//! └──────┘       └─────────────┘                  └──────┬──────┘
//!                       ▲            advance             │
//!                       ├────────────(rounds left)───────┤
//!                       │                                │ advance
//!                       │        start             ┌─────▼────┐
//!                       └◄─────────────────────────┤ Finished │
//!                                                  └──────────┘
//! ```
//!
//! Out-of-phase calls are silent no-ops (`None` / `false`), never errors:
//! double-taps from the UI and a tick racing a manual answer must not
//! corrupt the counters. The single phase field is the commit point - the
//! first path to lock the round wins, the other becomes a no-op.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::rng::DeterministicRng;
use crate::game::round::{self, Round};
use crate::game::stats::{self, RoundOutcome, RoundRecord, SessionSummary};
use crate::game::strategy::{Choice, Difficulty, Feedback, Strategy, Team};
use crate::game::timer::{Countdown, CountdownTick};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Configuration for a game session.
///
/// Supplied once at construction; changing settings means building a new
/// session. Defaults mirror the classic classroom setup: medium difficulty,
/// ten rounds, no timer, no teams.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Activity identifier, used for labeling and seed derivation only -
    /// the engine never reads the catalog
    pub activity_id: String,

    /// Difficulty level (gates the strategy pool)
    pub difficulty: Difficulty,

    /// Rounds per session (at least 1)
    pub round_count: u32,

    /// Seconds per round; 0 disables the countdown entirely
    pub timer_seconds: u32,

    /// Score correct answers per team instead of one shared tally
    pub teams_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            activity_id: "math-fractions-compare-2".to_string(),
            difficulty: Difficulty::Medium,
            round_count: 10,
            timer_seconds: 0,
            teams_enabled: false,
        }
    }
}

impl GameConfig {
    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.round_count == 0 {
            return Err(ConfigError::RoundCountZero);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A session must play at least one round.
    #[error("round count must be at least 1")]
    RoundCountZero,
}

// =============================================================================
// SESSION PHASE
// =============================================================================

/// Current phase of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Constructed but not started
    #[default]
    Idle,
    /// A round is open for exactly one answer
    RoundActive,
    /// The round resolved; waiting for advance
    RoundLocked,
    /// All rounds played; terminal until the next start
    Finished,
}

// =============================================================================
// GAME SESSION
// =============================================================================

/// A fraction-comparison quiz session.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    seed: u64,
    rng: DeterministicRng,
    phase: SessionPhase,

    /// Zero-based index of the current (or next) round
    round_index: u32,
    current_round: Option<Round>,
    countdown: Countdown,
    feedback: Option<Feedback>,

    score: u32,
    total_answered: u32,
    current_streak: u32,
    best_streak: u32,
    correct_count: u32,
    wrong_count: u32,
    timeout_count: u32,
    strategy_counts: [u32; Strategy::COUNT],
    team_scores: [u32; Team::COUNT],
    active_team: Team,

    history: Vec<RoundRecord>,
    started_at: Option<DateTime<Utc>>,
}

impl GameSession {
    /// Create an idle session.
    ///
    /// Same seed + same config reproduces the identical problem series;
    /// derive the seed with [`crate::core::rng::derive_session_seed`] to
    /// share a series between groups.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            seed,
            rng: DeterministicRng::new(seed),
            phase: SessionPhase::Idle,
            round_index: 0,
            current_round: None,
            countdown: Countdown::new(),
            feedback: None,
            score: 0,
            total_answered: 0,
            current_streak: 0,
            best_streak: 0,
            correct_count: 0,
            wrong_count: 0,
            timeout_count: 0,
            strategy_counts: [0; Strategy::COUNT],
            team_scores: [0; Team::COUNT],
            active_team: Team::A,
            history: Vec::new(),
            started_at: None,
        })
    }

    /// Start (or restart) the session: reset every counter, open round 0.
    ///
    /// Callable from any phase and the only way out of `Finished`. The
    /// entropy stream is not rewound, so a restart plays fresh rounds;
    /// build a new session with the same seed to replay a series.
    pub fn start(&mut self) {
        self.countdown.cancel();
        self.phase = SessionPhase::RoundActive;
        self.round_index = 0;
        self.score = 0;
        self.total_answered = 0;
        self.current_streak = 0;
        self.best_streak = 0;
        self.correct_count = 0;
        self.wrong_count = 0;
        self.timeout_count = 0;
        self.strategy_counts = [0; Strategy::COUNT];
        self.team_scores = [0; Team::COUNT];
        self.active_team = Team::A;
        self.history.clear();
        self.started_at = Some(Utc::now());
        self.begin_round();
    }

    /// Generate the round for the current index and arm the countdown.
    fn begin_round(&mut self) {
        self.current_round = Some(round::generate(self.config.difficulty, &mut self.rng));
        self.feedback = None;
        self.countdown.arm(self.config.timer_seconds);
    }

    /// Submit an answer for the open round.
    ///
    /// Valid only in `RoundActive`; anything else (locked round, finished
    /// session, never started) is a silent no-op returning `None`. The
    /// countdown is cancelled before any bookkeeping - no timeout can fire
    /// for a round that was answered.
    pub fn answer(&mut self, choice: Choice) -> Option<Feedback> {
        if self.phase != SessionPhase::RoundActive {
            return None;
        }
        let (correct, strategy) = match self.current_round.as_ref() {
            Some(round) => (round.correct, round.strategy),
            None => return None,
        };

        self.countdown.cancel();
        self.phase = SessionPhase::RoundLocked;

        self.total_answered += 1;
        self.strategy_counts[strategy as usize] += 1;

        let feedback = if choice == correct {
            self.score += 1;
            self.correct_count += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
            if self.config.teams_enabled {
                self.team_scores[self.active_team as usize] += 1;
            }
            Feedback::Ok
        } else {
            self.current_streak = 0;
            self.wrong_count += 1;
            Feedback::Bad
        };
        self.feedback = Some(feedback);

        let outcome = if feedback == Feedback::Ok {
            RoundOutcome::Correct
        } else {
            RoundOutcome::Wrong
        };
        self.push_record(strategy, Some(choice), correct, outcome);

        Some(feedback)
    }

    /// Advance the once-per-second external clock.
    ///
    /// Only decrements while a round is active; expiry commits the timeout
    /// (an automatic miss with its own counter) and locks the round. The
    /// token disarms on expiry, so a timeout fires at most once per round,
    /// and a tick arriving after a manual answer finds the phase already
    /// locked and does nothing.
    pub fn tick_second(&mut self) -> CountdownTick {
        if self.phase != SessionPhase::RoundActive {
            return CountdownTick::Idle;
        }
        let status = self.countdown.tick();
        if status == CountdownTick::Expired {
            self.commit_timeout();
        }
        status
    }

    /// Resolve the open round as timed out.
    fn commit_timeout(&mut self) {
        let (correct, strategy) = match self.current_round.as_ref() {
            Some(round) => (round.correct, round.strategy),
            None => return,
        };

        self.phase = SessionPhase::RoundLocked;
        self.total_answered += 1;
        self.strategy_counts[strategy as usize] += 1;
        self.timeout_count += 1;
        self.current_streak = 0;
        self.feedback = Some(Feedback::Timeout);
        self.push_record(strategy, None, correct, RoundOutcome::TimedOut);
    }

    /// Move on from a resolved round.
    ///
    /// Valid only in `RoundLocked` (`false` otherwise). Reaching the
    /// configured round count finishes the session and clears the round;
    /// otherwise the next round opens with a freshly armed countdown.
    pub fn advance(&mut self) -> bool {
        if self.phase != SessionPhase::RoundLocked {
            return false;
        }
        self.countdown.cancel();
        self.round_index += 1;
        if self.round_index >= self.config.round_count {
            self.current_round = None;
            self.phase = SessionPhase::Finished;
        } else {
            self.phase = SessionPhase::RoundActive;
            self.begin_round();
        }
        true
    }

    /// Choose which team the next correct answer credits.
    ///
    /// Allowed in any phase while team mode is on; `false` when it is off.
    pub fn set_active_team(&mut self, team: Team) -> bool {
        if !self.config.teams_enabled {
            return false;
        }
        self.active_team = team;
        true
    }

    fn push_record(
        &mut self,
        strategy: Strategy,
        choice: Option<Choice>,
        correct: Choice,
        outcome: RoundOutcome,
    ) {
        let team = self.config.teams_enabled.then_some(self.active_team);
        self.history.push(RoundRecord {
            round_index: self.round_index,
            strategy,
            choice,
            correct,
            outcome,
            team,
        });
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed this session was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Zero-based index of the current round.
    pub fn round_index(&self) -> u32 {
        self.round_index
    }

    /// The open or just-resolved round, if any.
    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    /// Is the current round resolved and waiting for advance?
    pub fn locked(&self) -> bool {
        self.phase == SessionPhase::RoundLocked
    }

    /// Has the session played all its rounds?
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    /// Feedback for the current round, absent while it is open.
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Correct answers so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rounds resolved so far (answered or timed out).
    pub fn total_answered(&self) -> u32 {
        self.total_answered
    }

    /// Consecutive correct answers ending now.
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    /// Longest streak of the session.
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// Correct-answer count.
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    /// Wrong-answer count (timeouts not included).
    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    /// Timed-out round count.
    pub fn timeout_count(&self) -> u32 {
        self.timeout_count
    }

    /// Resolved rounds per strategy, indexed by discriminant.
    pub fn strategy_counts(&self) -> &[u32; Strategy::COUNT] {
        &self.strategy_counts
    }

    /// Correct answers per team, indexed by discriminant.
    pub fn team_scores(&self) -> &[u32; Team::COUNT] {
        &self.team_scores
    }

    /// Team the next correct answer credits.
    pub fn active_team(&self) -> Team {
        self.active_team
    }

    /// Seconds left on the round countdown, `None` when no timer runs.
    pub fn time_remaining(&self) -> Option<u32> {
        self.countdown.remaining()
    }

    /// Every resolved round of the current play-through, oldest first.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// When the session was last started.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    // =========================================================================
    // DERIVED STATISTICS
    // =========================================================================

    /// Whole-percent accuracy over resolved rounds (0 when none).
    pub fn accuracy(&self) -> u32 {
        stats::accuracy_percent(self.score, self.total_answered)
    }

    /// Leading team and its score; `None` when team mode is off.
    pub fn best_team(&self) -> Option<(Team, u32)> {
        stats::best_team(&self.team_scores, self.config.teams_enabled)
    }

    /// Exportable report over the session so far.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            activity_id: self.config.activity_id.clone(),
            difficulty: self.config.difficulty,
            round_count: self.config.round_count,
            rounds_played: self.total_answered,
            score: self.score,
            accuracy: self.accuracy(),
            correct_count: self.correct_count,
            wrong_count: self.wrong_count,
            timeout_count: self.timeout_count,
            best_streak: self.best_streak,
            strategy_counts: stats::strategy_breakdown(&self.strategy_counts),
            team_scores: self
                .config
                .teams_enabled
                .then(|| stats::team_breakdown(&self.team_scores)),
            best_team: self.best_team().map(|(team, _)| team),
            started_at: self.started_at,
            finished: self.phase == SessionPhase::Finished,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

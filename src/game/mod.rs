//! Game Logic Module
//!
//! The quiz engine proper. 100% deterministic given a seed.
//!
//! ## Module Structure
//!
//! - `strategy`: Closed vocabulary - strategies, difficulty, choices, teams
//! - `round`: Round generation, one builder per strategy
//! - `timer`: Per-round countdown token
//! - `session`: Session state machine, counters, history
//! - `stats`: Derived statistics and the exportable summary
//! - `view`: Serializable display snapshot

pub mod round;
pub mod session;
pub mod stats;
pub mod strategy;
pub mod timer;
pub mod view;

// Re-export key types
pub use round::Round;
pub use session::{ConfigError, GameConfig, GameSession, SessionPhase};
pub use stats::{RoundOutcome, RoundRecord, SessionSummary};
pub use strategy::{Choice, Difficulty, Feedback, Strategy, Team};
pub use timer::{Countdown, CountdownTick};
pub use view::SessionView;

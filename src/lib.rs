//! # Fraction Duel
//!
//! Deterministic quiz engine for a classroom fraction-comparison game,
//! plus the activity catalog it lives in.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        FRACTION DUEL                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── fraction.rs - Exact fractions and cross-product order   │
//! │  └── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │                                                              │
//! │  game/           - Quiz engine (deterministic)               │
//! │  ├── strategy.rs - Strategy and difficulty vocabulary        │
//! │  ├── round.rs    - Question generation per strategy          │
//! │  ├── timer.rs    - One-shot 1 Hz countdown                   │
//! │  ├── session.rs  - Session state machine                     │
//! │  ├── stats.rs    - Scoreboard math and summaries             │
//! │  └── view.rs     - Spoiler-safe render snapshots             │
//! │                                                              │
//! │  catalog/        - Activity browsing (pure data)             │
//! │  ├── activity.rs - Built-in activity entries                 │
//! │  ├── favorites.rs- Starred activity ids                      │
//! │  └── search.rs   - Text search and chip filters              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The `core/` and `game/` modules are **100% deterministic**:
//! - Exact integer fraction arithmetic, no floating point
//! - No HashMap (uses BTree collections for sorted iteration)
//! - All randomness from a seeded Xorshift128+ stream
//! - No system time in game outcomes (the session start timestamp is
//!   reporting metadata only)
//!
//! Given the same configuration and seed, a session asks the same
//! questions in the same order on any platform.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use catalog::{Activity, ActivityFilter, Catalog, Favorites, SearchQuery};
pub use crate::core::fraction::{gcd, Fraction};
pub use crate::core::rng::{derive_session_seed, DeterministicRng};
pub use game::round::Round;
pub use game::session::{ConfigError, GameConfig, GameSession, SessionPhase};
pub use game::stats::SessionSummary;
pub use game::strategy::{Choice, Difficulty, Feedback, Strategy, Team};
pub use game::view::SessionView;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Countdown tick rate (Hz). Hosts call [`GameSession::tick_second`]
/// at this rate; the engine itself never reads a clock.
pub const COUNTDOWN_TICK_HZ: u32 = 1;

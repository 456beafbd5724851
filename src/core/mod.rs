//! Core deterministic primitives.
//!
//! All types in this module are designed for perfect cross-platform
//! determinism. They are the foundation that makes a seeded session
//! reproduce the same problem series everywhere.

pub mod fraction;
pub mod rng;

// Re-export core types
pub use fraction::{gcd, Fraction};
pub use rng::{derive_session_seed, DeterministicRng};

//! Catalog Layer
//!
//! The activity list surrounding the quiz: built-in entries, per-user
//! favorites, and search/filtering. Pure data, no I/O; the quiz engine
//! in [`crate::game`] only ever sees an activity id from here.

pub mod activity;
pub mod favorites;
pub mod search;

pub use activity::{Activity, Catalog, GroupFormat, Subject, BUILTIN_ACTIVITIES};
pub use favorites::Favorites;
pub use search::{ActivityFilter, SearchQuery};

//! Favorites
//!
//! Per-user set of starred activity identifiers. In-memory only; the
//! hosting app decides if and how it persists. BTreeSet so iteration
//! order is stable for rendering and tests.

use std::collections::BTreeSet;

/// Set of starred activity ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<String>,
}

impl Favorites {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the star for `id`. Returns the new state: `true` when the
    /// activity is now a favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_owned());
            true
        }
    }

    /// Is `id` starred?
    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of starred activities.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is starred.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Starred ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut favorites = Favorites::new();
        assert!(!favorites.is_favorite("math-fractions-2"));

        assert!(favorites.toggle("math-fractions-2"), "first toggle stars");
        assert!(favorites.is_favorite("math-fractions-2"));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle("math-fractions-2"), "second toggle unstars");
        assert!(!favorites.is_favorite("math-fractions-2"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_is_per_id() {
        let mut favorites = Favorites::new();
        favorites.toggle("a");
        favorites.toggle("b");
        favorites.toggle("a");
        assert!(!favorites.is_favorite("a"));
        assert!(favorites.is_favorite("b"));
    }

    #[test]
    fn test_ids_iterate_sorted() {
        let mut favorites = Favorites::new();
        favorites.toggle("zebra");
        favorites.toggle("alpha");
        favorites.toggle("milieu");
        let order: Vec<&str> = favorites.ids().collect();
        assert_eq!(order, vec!["alpha", "milieu", "zebra"]);
    }
}

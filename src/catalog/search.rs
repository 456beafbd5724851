//! Search & Filtering
//!
//! Text search over the catalog plus the subject / cycle chip filters.
//! The query is a plain owned value the hosting view constructs and
//! passes down; there is no shared mutable channel, so a test or a view
//! always knows exactly which query produced a result list.

use super::activity::{Activity, Subject};

// =============================================================================
// SEARCH QUERY
// =============================================================================

/// Free-text search query.
///
/// Matching is case-insensitive substring over the activity title and
/// objective, with surrounding whitespace ignored. An empty (or
/// all-whitespace) query matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Empty query, matches every activity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Query for the given text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Replace the query text.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Reset to the match-all query.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The raw text as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the query matches everything.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Does `activity` match this query?
    pub fn matches(&self, activity: &Activity) -> bool {
        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        activity.title.to_lowercase().contains(&needle)
            || activity.objective.to_lowercase().contains(&needle)
    }
}

// =============================================================================
// ACTIVITY FILTER
// =============================================================================

/// Combined chip filters plus text query, mirroring the activity list
/// view: subject and cycle narrow first, then the query runs over what
/// remains. `None` on a chip means "Tous".
#[derive(Clone, Debug, Default)]
pub struct ActivityFilter {
    /// Free-text query
    pub query: SearchQuery,
    /// Keep only this subject, or all subjects when `None`
    pub subject: Option<Subject>,
    /// Keep only this cycle, or all cycles when `None`
    pub cycle: Option<u8>,
}

impl ActivityFilter {
    /// Match-all filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Does `activity` pass every active criterion?
    pub fn matches(&self, activity: &Activity) -> bool {
        if let Some(subject) = self.subject {
            if activity.subject != subject {
                return false;
            }
        }
        if let Some(cycle) = self.cycle {
            if activity.cycle != cycle {
                return false;
            }
        }
        self.query.matches(activity)
    }

    /// Filter a list, keeping declaration order.
    pub fn apply<'a>(&self, activities: &'a [Activity]) -> Vec<&'a Activity> {
        activities.iter().filter(|a| self.matches(a)).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Favorites};

    #[test]
    fn test_blank_query_matches_all() {
        let catalog = Catalog::builtin();
        for query in [SearchQuery::new(), SearchQuery::from_text("   ")] {
            let hits = catalog.all().iter().filter(|a| query.matches(a)).count();
            assert_eq!(hits, catalog.len(), "blank query must match everything");
        }
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let pizzeria = catalog.lookup("math-fractions-2").expect("known id");
        assert!(SearchQuery::from_text("PIZZERIA").matches(pizzeria));
        assert!(SearchQuery::from_text("pizzeria").matches(pizzeria));
    }

    #[test]
    fn test_query_folds_accented_uppercase() {
        let catalog = Catalog::builtin();
        let timeline = catalog.lookup("us-ligne-temps-2").expect("known id");
        assert!(SearchQuery::from_text("ÉCLAIR").matches(timeline));
    }

    #[test]
    fn test_query_trims_whitespace() {
        let catalog = Catalog::builtin();
        let phrases = catalog.lookup("fra-phrase-1").expect("known id");
        assert!(SearchQuery::from_text("  punch  ").matches(phrases));
    }

    #[test]
    fn test_query_searches_objective_too() {
        let catalog = Catalog::builtin();
        let science = catalog.lookup("sci-melanges-3").expect("known id");
        // "soluble" appears only in the objective, not the title.
        assert!(SearchQuery::from_text("soluble").matches(science));
    }

    #[test]
    fn test_query_no_match() {
        let catalog = Catalog::builtin();
        let query = SearchQuery::from_text("astronomie");
        assert!(catalog.all().iter().all(|a| !query.matches(a)));
    }

    #[test]
    fn test_subject_chip() {
        let catalog = Catalog::builtin();
        let filter = ActivityFilter {
            subject: Some(Subject::Math),
            ..ActivityFilter::new()
        };
        let hits = filter.apply(catalog.all());
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|a| a.subject == Subject::Math));
    }

    #[test]
    fn test_cycle_chip() {
        let catalog = Catalog::builtin();
        let filter = ActivityFilter {
            cycle: Some(1),
            ..ActivityFilter::new()
        };
        let ids: Vec<&str> = filter.apply(catalog.all()).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["fra-phrase-1", "arts-tableaux-1"]);
    }

    #[test]
    fn test_chips_and_query_compose() {
        let catalog = Catalog::builtin();
        let filter = ActivityFilter {
            query: SearchQuery::from_text("fractions"),
            subject: Some(Subject::Math),
            cycle: Some(2),
        };
        let hits = filter.apply(catalog.all());
        assert_eq!(hits.len(), 2, "both Math cycle-2 fraction activities");

        let filter = ActivityFilter {
            query: SearchQuery::from_text("pizzeria"),
            subject: Some(Subject::Math),
            cycle: Some(2),
        };
        let hits = filter.apply(catalog.all());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "math-fractions-2");
    }

    #[test]
    fn test_chip_mismatch_beats_query_match() {
        let catalog = Catalog::builtin();
        let filter = ActivityFilter {
            query: SearchQuery::from_text("fractions"),
            subject: Some(Subject::Arts),
            cycle: None,
        };
        assert!(filter.apply(catalog.all()).is_empty());
    }

    #[test]
    fn test_favorites_view_composition() {
        let catalog = Catalog::builtin();
        let mut favorites = Favorites::new();
        favorites.toggle("math-fractions-2");
        favorites.toggle("arts-tableaux-1");

        let query = SearchQuery::from_text("fractions");
        let hits: Vec<&str> = catalog
            .all()
            .iter()
            .filter(|a| favorites.is_favorite(a.id) && query.matches(a))
            .map(|a| a.id)
            .collect();
        assert_eq!(hits, vec!["math-fractions-2"]);
    }

    #[test]
    fn test_set_and_clear() {
        let mut query = SearchQuery::new();
        assert!(query.is_blank());
        query.set("éclair");
        assert_eq!(query.text(), "éclair");
        assert!(!query.is_blank());
        query.clear();
        assert!(query.is_blank());
    }
}

//! Activity Catalog
//!
//! The built-in list of classroom activities the surrounding views render.
//! Read-only, keyed by stable string identifiers; the quiz engine never
//! reads it - it only receives an identifier for labeling. Content is
//! French (Québec primary-school material), matching the app it serves.

use serde::Serialize;

// =============================================================================
// VOCABULARY
// =============================================================================

/// School subject of an activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    /// Français
    Francais,
    /// Mathématique
    Math,
    /// Science et technologie
    Science,
    /// Univers social
    UniversSocial,
    /// Arts plastiques et dramatiques
    Arts,
    /// Anglais, langue seconde
    Anglais,
}

impl Subject {
    /// French display label.
    pub fn label(self) -> &'static str {
        match self {
            Subject::Francais => "Français",
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::UniversSocial => "Univers social",
            Subject::Arts => "Arts",
            Subject::Anglais => "Anglais",
        }
    }
}

/// How the class is organized for an activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupFormat {
    /// One student alone
    Solo,
    /// Pairs
    Dyade,
    /// Small teams
    Equipe,
    /// Whole class
    Groupe,
}

impl GroupFormat {
    /// French display label.
    pub fn label(self) -> &'static str {
        match self {
            GroupFormat::Solo => "Solo",
            GroupFormat::Dyade => "Dyade",
            GroupFormat::Equipe => "Équipe",
            GroupFormat::Groupe => "Groupe",
        }
    }
}

// =============================================================================
// ACTIVITY
// =============================================================================

/// One catalog entry. Immutable built-in data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Activity {
    /// Stable identifier, also the favorites and routing key
    pub id: &'static str,

    /// Display title
    pub title: &'static str,

    /// School subject
    pub subject: Subject,

    /// School cycle, 1 to 3
    pub cycle: u8,

    /// Planned duration in minutes
    pub duration_min: u32,

    /// Class organization
    pub group: GroupFormat,

    /// One-line learning objective
    pub objective: &'static str,
}

/// The built-in catalog.
///
/// The first six entries are the activity cards; the last is the
/// interactive comparison game, which also resolves through `lookup` so
/// its title and metadata come from one place.
pub const BUILTIN_ACTIVITIES: [Activity; 7] = [
    Activity {
        id: "fra-phrase-1",
        title: "Phrases qui ont du punch",
        subject: Subject::Francais,
        cycle: 1,
        duration_min: 20,
        group: GroupFormat::Dyade,
        objective: "Construire des phrases complètes (majuscule, sens, point).",
    },
    Activity {
        id: "math-fractions-2",
        title: "La pizzeria des fractions",
        subject: Subject::Math,
        cycle: 2,
        duration_min: 30,
        group: GroupFormat::Equipe,
        objective: "Représenter des fractions simples et comparer des parts.",
    },
    Activity {
        id: "sci-melanges-3",
        title: "Mélange ou pas mélange ?",
        subject: Subject::Science,
        cycle: 3,
        duration_min: 35,
        group: GroupFormat::Groupe,
        objective: "Distinguer soluble / insoluble.",
    },
    Activity {
        id: "us-ligne-temps-2",
        title: "Ligne du temps éclair",
        subject: Subject::UniversSocial,
        cycle: 2,
        duration_min: 25,
        group: GroupFormat::Groupe,
        objective: "Placer des événements dans l’ordre et justifier.",
    },
    Activity {
        id: "arts-tableaux-1",
        title: "Tableaux vivants",
        subject: Subject::Arts,
        cycle: 1,
        duration_min: 15,
        group: GroupFormat::Groupe,
        objective: "Exprimer une émotion par une posture et une mise en scène.",
    },
    Activity {
        id: "ang-commands-2",
        title: "Classroom commands game",
        subject: Subject::Anglais,
        cycle: 2,
        duration_min: 20,
        group: GroupFormat::Equipe,
        objective: "Comprendre et exécuter des consignes courtes.",
    },
    Activity {
        id: "math-fractions-compare-2",
        title: "Comparer des fractions (sans calculatrice)",
        subject: Subject::Math,
        cycle: 2,
        duration_min: 30,
        group: GroupFormat::Equipe,
        objective: "Comparer des fractions en utilisant des représentations et des stratégies (même dénominateur, repère de 1/2 et 1, fractions équivalentes).",
    },
];

// =============================================================================
// CATALOG
// =============================================================================

/// Read-only activity lookup.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    entries: &'static [Activity],
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            entries: &BUILTIN_ACTIVITIES,
        }
    }

    /// Find an activity by identifier. An unknown id is a defined `None`,
    /// not a fault.
    pub fn lookup(&self, id: &str) -> Option<&Activity> {
        self.entries.iter().find(|a| a.id == id)
    }

    /// All entries in declaration order.
    pub fn all(&self) -> &[Activity] {
        self.entries
    }

    /// Entry count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the catalog empty? (The built-in one never is.)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        for (i, a) in catalog.all().iter().enumerate() {
            for b in catalog.all().iter().skip(i + 1) {
                assert_ne!(a.id, b.id, "duplicate activity id");
            }
        }
    }

    #[test]
    fn test_lookup_hit() {
        let catalog = Catalog::builtin();
        let activity = catalog.lookup("math-fractions-2").expect("known id");
        assert_eq!(activity.title, "La pizzeria des fractions");
        assert_eq!(activity.subject, Subject::Math);
        assert_eq!(activity.cycle, 2);
        assert_eq!(activity.group, GroupFormat::Equipe);
    }

    #[test]
    fn test_lookup_resolves_the_game_activity() {
        let catalog = Catalog::builtin();
        let game = catalog
            .lookup("math-fractions-compare-2")
            .expect("the game is a catalog entry");
        assert_eq!(game.duration_min, 30);
        assert!(game.objective.contains("stratégies"));
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.lookup("does-not-exist").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn test_every_entry_is_well_formed() {
        for activity in Catalog::builtin().all() {
            assert!(!activity.id.is_empty());
            assert!(!activity.title.is_empty());
            assert!(!activity.objective.is_empty());
            assert!((1..=3).contains(&activity.cycle), "cycle out of range");
            assert!(activity.duration_min > 0);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Subject::UniversSocial.label(), "Univers social");
        assert_eq!(GroupFormat::Equipe.label(), "Équipe");
    }
}

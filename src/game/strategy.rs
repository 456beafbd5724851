//! Quiz Vocabulary
//!
//! The closed sets the whole engine speaks in: comparison strategies,
//! difficulty levels, answer choices, teams, feedback. All are small
//! `#[repr(u8)]` enums so counters can live in fixed-size arrays indexed
//! by discriminant - no growable maps, no missing keys.
//!
//! Display labels are French because the surrounding classroom app is;
//! identifiers and docs stay English.

use serde::{Deserialize, Serialize};

// =============================================================================
// STRATEGY
// =============================================================================

/// Pedagogical technique a round is built to exercise.
///
/// Each strategy constructs operands so that its technique is the natural
/// way to compare them. The set is closed: per-strategy counters are
/// `[u32; Strategy::COUNT]` indexed by discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Strategy {
    /// Same denominator - compare numerators directly
    SameDenominator = 0,
    /// Rewrite one operand as an equivalent fraction first
    EquivalentFractions = 1,
    /// Both operands near 1 - compare what is missing to reach 1
    NearOne = 2,
    /// One operand below 1/2, the other above
    HalfReference = 3,
    /// No shortcut - cross multiplication
    CrossMultiply = 4,
}

impl Strategy {
    /// Number of strategies (fixed counter-array length).
    pub const COUNT: usize = 5;

    /// All strategies in declaration order.
    pub const ALL: [Strategy; Self::COUNT] = [
        Strategy::SameDenominator,
        Strategy::EquivalentFractions,
        Strategy::NearOne,
        Strategy::HalfReference,
        Strategy::CrossMultiply,
    ];

    /// Get strategy from index (0-4).
    pub fn from_index(index: u8) -> Option<Strategy> {
        match index {
            0 => Some(Strategy::SameDenominator),
            1 => Some(Strategy::EquivalentFractions),
            2 => Some(Strategy::NearOne),
            3 => Some(Strategy::HalfReference),
            4 => Some(Strategy::CrossMultiply),
            _ => None,
        }
    }

    /// French display label.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::SameDenominator => "Même dénominateur",
            Strategy::EquivalentFractions => "Fractions équivalentes",
            Strategy::NearOne => "Proche de 1",
            Strategy::HalfReference => "Repère 1/2",
            Strategy::CrossMultiply => "Produit croisé",
        }
    }
}

// =============================================================================
// DIFFICULTY
// =============================================================================

/// Difficulty level - gates which strategies a session draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Difficulty {
    /// Two visual strategies only
    Easy = 0,
    /// Adds equivalence-based strategies
    #[default]
    Medium = 1,
    /// Everything, including raw cross multiplication
    Hard = 2,
}

impl Difficulty {
    /// Strategies eligible at this difficulty.
    ///
    /// Pools are strictly nested: the easy pool is inside medium, and
    /// medium inside hard. A session draws uniformly from its pool for
    /// every round.
    pub fn strategy_pool(self) -> &'static [Strategy] {
        match self {
            Difficulty::Easy => &[Strategy::SameDenominator, Strategy::HalfReference],
            Difficulty::Medium => &[
                Strategy::SameDenominator,
                Strategy::HalfReference,
                Strategy::EquivalentFractions,
                Strategy::NearOne,
            ],
            Difficulty::Hard => &Strategy::ALL,
        }
    }

    /// French display label.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Facile",
            Difficulty::Medium => "Moyen",
            Difficulty::Hard => "Difficile",
        }
    }
}

// =============================================================================
// ANSWER CHOICE
// =============================================================================

/// A submitted answer: which operand is larger, or are they equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Choice {
    /// Left operand is larger
    A = 0,
    /// Right operand is larger
    B = 1,
    /// Both operands have the same value
    Equal = 2,
}

impl Choice {
    /// French display label.
    pub fn label(self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
            Choice::Equal => "Égales",
        }
    }
}

// =============================================================================
// TEAM
// =============================================================================

/// Team identifier for team mode.
///
/// Declaration order is the tie-break order: when scores tie, the first
/// declared team wins the comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Team {
    /// First team (tie-break winner)
    #[default]
    A = 0,
    /// Second team
    B = 1,
}

impl Team {
    /// Number of teams (fixed score-array length).
    pub const COUNT: usize = 2;

    /// All teams in declaration (tie-break) order.
    pub const ALL: [Team; Self::COUNT] = [Team::A, Team::B];

    /// Get team from index (0-1).
    pub fn from_index(index: u8) -> Option<Team> {
        match index {
            0 => Some(Team::A),
            1 => Some(Team::B),
            _ => None,
        }
    }

    /// French display label.
    pub fn label(self) -> &'static str {
        match self {
            Team::A => "Équipe A",
            Team::B => "Équipe B",
        }
    }
}

// =============================================================================
// FEEDBACK
// =============================================================================

/// Outcome shown to the class after a round resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Feedback {
    /// Correct answer
    Ok = 0,
    /// Wrong answer
    Bad = 1,
    /// Countdown ran out before any answer
    Timeout = 2,
}

impl Feedback {
    /// French display label.
    pub fn label(self) -> &'static str {
        match self {
            Feedback::Ok => "Bravo !",
            Feedback::Bad => "Presque…",
            Feedback::Timeout => "Temps écoulé !",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_indices_round_trip() {
        for (i, strategy) in Strategy::ALL.iter().enumerate() {
            assert_eq!(Strategy::from_index(i as u8), Some(*strategy));
            assert_eq!(*strategy as usize, i);
        }
        assert_eq!(Strategy::from_index(5), None);
    }

    #[test]
    fn test_difficulty_pools_are_nested() {
        let easy = Difficulty::Easy.strategy_pool();
        let medium = Difficulty::Medium.strategy_pool();
        let hard = Difficulty::Hard.strategy_pool();

        assert_eq!(easy.len(), 2);
        assert_eq!(medium.len(), 4);
        assert_eq!(hard.len(), Strategy::COUNT);

        for s in easy {
            assert!(medium.contains(s), "easy pool must be inside medium");
        }
        for s in medium {
            assert!(hard.contains(s), "medium pool must be inside hard");
        }
    }

    #[test]
    fn test_cross_multiply_is_hard_only() {
        assert!(!Difficulty::Easy.strategy_pool().contains(&Strategy::CrossMultiply));
        assert!(!Difficulty::Medium.strategy_pool().contains(&Strategy::CrossMultiply));
        assert!(Difficulty::Hard.strategy_pool().contains(&Strategy::CrossMultiply));
    }

    #[test]
    fn test_team_indices_round_trip() {
        for (i, team) in Team::ALL.iter().enumerate() {
            assert_eq!(Team::from_index(i as u8), Some(*team));
            assert_eq!(*team as usize, i);
        }
        assert_eq!(Team::from_index(2), None);
    }

    #[test]
    fn test_labels_are_nonempty() {
        for s in Strategy::ALL {
            assert!(!s.label().is_empty());
        }
        for t in Team::ALL {
            assert!(!t.label().is_empty());
        }
        assert!(!Difficulty::Easy.label().is_empty());
        assert!(!Choice::Equal.label().is_empty());
        assert!(!Feedback::Timeout.label().is_empty());
    }

    #[test]
    fn test_serde_snake_case_tags() {
        let json = serde_json::to_string(&Strategy::SameDenominator).unwrap();
        assert_eq!(json, "\"same_denominator\"");
        let json = serde_json::to_string(&Feedback::Timeout).unwrap();
        assert_eq!(json, "\"timeout\"");
        let back: Choice = serde_json::from_str("\"equal\"").unwrap();
        assert_eq!(back, Choice::Equal);
    }
}

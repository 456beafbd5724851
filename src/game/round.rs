//! Round Generation
//!
//! Deterministic fraction-comparison problems driven by the session RNG.
//!
//! Each strategy builds its operands so that its technique is the natural
//! way to compare them. Hint and explanation strings are phrased from the
//! construction-time operands; the operands are then reduced for display
//! and the correct answer is derived from the exact comparison on the
//! reduced pair - never from the strategy's narrative.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::fraction::Fraction;
use crate::core::rng::DeterministicRng;
use crate::game::strategy::{Choice, Difficulty, Strategy};

/// Denominators for the same-denominator, near-one and half-reference builders.
/// All even and rich in divisors, so reductions stay friendly.
const FRIENDLY_DENOMINATORS: [i64; 4] = [6, 8, 10, 12];

/// Denominators for cross-multiplication rounds (two drawn independently).
const MIXED_DENOMINATORS: [i64; 6] = [4, 5, 6, 8, 10, 12];

/// Base numerators for the equivalent-fractions builder.
const EQUIV_BASE_NUMERATORS: [i64; 3] = [1, 2, 3];

/// Base denominators for the equivalent-fractions builder.
const EQUIV_BASE_DENOMINATORS: [i64; 4] = [3, 4, 5, 6];

/// Scale factors for the equivalent-fractions builder.
const EQUIV_SCALE_FACTORS: [i64; 2] = [2, 3];

// =============================================================================
// ROUND
// =============================================================================

/// One generated comparison problem.
///
/// Immutable once created; the session replaces it wholesale on advance.
/// Operands are in lowest terms. `correct` always agrees with
/// [`Fraction::compare`] on `a` and `b`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Left operand (reduced)
    pub a: Fraction,

    /// Right operand (reduced)
    pub b: Fraction,

    /// The answer the comparison actually yields
    pub correct: Choice,

    /// Strategy hint shown while the round is open
    pub hint: String,

    /// Worked explanation revealed once the round resolves
    pub explanation: String,

    /// Technique this round was built to exercise
    pub strategy: Strategy,
}

/// Operands and prose before reduction and judging.
struct Draft {
    a: Fraction,
    b: Fraction,
    hint: &'static str,
    explanation: String,
}

// =============================================================================
// GENERATION
// =============================================================================

/// Generate a round for the given difficulty.
///
/// The strategy is drawn uniformly from the difficulty's pool; everything
/// else comes from the same RNG, so one seed reproduces the whole series.
pub fn generate(difficulty: Difficulty, rng: &mut DeterministicRng) -> Round {
    let strategy = rng
        .choose(difficulty.strategy_pool())
        .copied()
        .unwrap_or(Strategy::SameDenominator);
    generate_with(strategy, rng)
}

/// Generate a round for a specific strategy (targeted practice).
pub fn generate_with(strategy: Strategy, rng: &mut DeterministicRng) -> Round {
    let draft = match strategy {
        Strategy::SameDenominator => same_denominator(rng),
        Strategy::EquivalentFractions => equivalent_fractions(rng),
        Strategy::NearOne => near_one(rng),
        Strategy::HalfReference => half_reference(rng),
        Strategy::CrossMultiply => cross_multiply(rng),
    };
    finish(strategy, draft)
}

/// Reduce the operands and judge the draft.
///
/// The explanation keeps the construction-time numbers; only the displayed
/// operands change representation, never value, so the judgment is the same.
fn finish(strategy: Strategy, draft: Draft) -> Round {
    let a = draft.a.reduce();
    let b = draft.b.reduce();
    let correct = match a.compare(b) {
        Ordering::Equal => Choice::Equal,
        Ordering::Greater => Choice::A,
        Ordering::Less => Choice::B,
    };
    Round {
        a,
        b,
        correct,
        hint: draft.hint.to_string(),
        explanation: draft.explanation,
        strategy,
    }
}

/// Uniform pick from a non-empty constant pool.
fn pick(rng: &mut DeterministicRng, pool: &[i64]) -> i64 {
    // Pools are compile-time non-empty arrays; the index stays in range.
    pool[rng.next_int(pool.len() as u32) as usize]
}

// =============================================================================
// STRATEGY BUILDERS
// =============================================================================

/// Same denominator, two distinct numerators: compare numerators directly.
fn same_denominator(rng: &mut DeterministicRng) -> Draft {
    let d = pick(rng, &FRIENDLY_DENOMINATORS);
    let n1 = rng.next_int_range(1, d - 1);
    let mut n2 = rng.next_int_range(1, d - 1);
    while n2 == n1 {
        n2 = rng.next_int_range(1, d - 1);
    }
    Draft {
        a: Fraction::new(n1, d),
        b: Fraction::new(n2, d),
        hint: "Même dénominateur → compare les numérateurs.",
        explanation: format!(
            "Même dénominateur ({d}) : {} parts > {} parts.",
            n1.max(n2),
            n1.min(n2)
        ),
    }
}

/// One operand is a scaled-up equivalent of a small base fraction; the other
/// shares its denominator with a nudged numerator.
fn equivalent_fractions(rng: &mut DeterministicRng) -> Draft {
    let base = Fraction::new(
        pick(rng, &EQUIV_BASE_NUMERATORS),
        pick(rng, &EQUIV_BASE_DENOMINATORS),
    );
    let k = pick(rng, &EQUIV_SCALE_FACTORS);
    let base_reduced = base.reduce();
    let scaled = Fraction::new(base_reduced.num * k, base_reduced.den * k);

    // Nudge the second numerator off the first. Scaled numerators are
    // always >= 2 and never land on d-1, so one of the fallbacks is
    // always distinct and in [1, d-1]: the operands cannot tie.
    let target_d = scaled.den;
    let bump = if rng.next_bool() { 1 } else { -1 };
    let mut other_n = (scaled.num + bump).clamp(1, target_d - 1);
    if other_n == scaled.num {
        other_n = (scaled.num + 1).min(target_d - 1);
    }
    if other_n == scaled.num {
        other_n = scaled.num - 1;
    }

    Draft {
        a: scaled,
        b: Fraction::new(other_n, target_d),
        hint: "Transforme en fractions équivalentes (même dénominateur).",
        explanation: format!(
            "{scaled} est équivalente à {base_reduced}. Compare ensuite {}/{target_d} à {other_n}/{target_d}.",
            scaled.num
        ),
    }
}

/// Both operands sit just under 1 with distinct gaps: compare what is
/// missing to reach 1.
fn near_one(rng: &mut DeterministicRng) -> Draft {
    let d = pick(rng, &FRIENDLY_DENOMINATORS);
    let gap_a = rng.next_int_range(1, 3);
    let mut gap_b = rng.next_int_range(1, 3);
    while gap_b == gap_a {
        gap_b = rng.next_int_range(1, 3);
    }
    let a = Fraction::new((d - gap_a).max(1), d);
    let b = Fraction::new((d - gap_b).max(1), d);
    Draft {
        hint: "Proche de 1 : compare ce qui manque pour faire 1.",
        explanation: format!(
            "À 1 il manque {}/{d} vs {}/{d} : celui qui manque le moins est plus grand.",
            d - a.num,
            d - b.num
        ),
        a,
        b,
    }
}

/// One operand below 1/2, the other above; A is always the low one.
fn half_reference(rng: &mut DeterministicRng) -> Draft {
    let d = pick(rng, &FRIENDLY_DENOMINATORS);
    let half = d / 2;
    let a = Fraction::new((half - rng.next_int_range(1, 2)).max(1), d);
    let b = Fraction::new((half + rng.next_int_range(1, 2)).min(d - 1), d);
    Draft {
        hint: "Repère 1/2 : au-dessus de 1/2 est plus grand.",
        explanation: format!("{a} est sous 1/2, {b} est au-dessus de 1/2."),
        a,
        b,
    }
}

/// Unrelated denominators, no shortcut: cross multiplication. The one
/// builder where equal values can occur; they are judged `Equal`, not
/// rejected.
fn cross_multiply(rng: &mut DeterministicRng) -> Draft {
    let d1 = pick(rng, &MIXED_DENOMINATORS);
    let d2 = pick(rng, &MIXED_DENOMINATORS);
    let a = Fraction::new(rng.next_int_range(1, d1 - 1), d1);
    let b = Fraction::new(rng.next_int_range(1, d2 - 1), d2);
    Draft {
        hint: "Astuce : mets au même dénominateur ou compare par produit croisé.",
        explanation: format!(
            "Produit croisé : compare {}×{} et {}×{}.",
            a.num, b.den, b.num, a.den
        ),
        a,
        b,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_determinism() {
        let mut rng1 = DeterministicRng::new(9001);
        let mut rng2 = DeterministicRng::new(9001);

        for _ in 0..50 {
            let r1 = generate(Difficulty::Hard, &mut rng1);
            let r2 = generate(Difficulty::Hard, &mut rng2);
            assert_eq!(r1, r2, "same seed must yield the same round");
        }
    }

    #[test]
    fn test_easy_pool_gating() {
        let mut rng = DeterministicRng::new(7);
        for _ in 0..1000 {
            let round = generate(Difficulty::Easy, &mut rng);
            assert!(
                matches!(
                    round.strategy,
                    Strategy::SameDenominator | Strategy::HalfReference
                ),
                "easy must only draw its two strategies, got {:?}",
                round.strategy
            );
        }
    }

    #[test]
    fn test_medium_never_cross_multiplies() {
        let mut rng = DeterministicRng::new(8);
        for _ in 0..1000 {
            let round = generate(Difficulty::Medium, &mut rng);
            assert_ne!(round.strategy, Strategy::CrossMultiply);
        }
    }

    #[test]
    fn test_hard_reaches_every_strategy() {
        let mut rng = DeterministicRng::new(9);
        let mut seen = [false; Strategy::COUNT];
        for _ in 0..2000 {
            let round = generate(Difficulty::Hard, &mut rng);
            seen[round.strategy as usize] = true;
        }
        assert_eq!(seen, [true; Strategy::COUNT], "all five strategies drawn");
    }

    #[test]
    fn test_correct_agrees_with_comparison() {
        let mut rng = DeterministicRng::new(123);
        for _ in 0..500 {
            let round = generate(Difficulty::Hard, &mut rng);
            let expected = match round.a.compare(round.b) {
                Ordering::Equal => Choice::Equal,
                Ordering::Greater => Choice::A,
                Ordering::Less => Choice::B,
            };
            assert_eq!(
                round.correct, expected,
                "correct answer must come from the comparison: {} vs {}",
                round.a, round.b
            );
        }
    }

    #[test]
    fn test_operands_are_reduced() {
        let mut rng = DeterministicRng::new(321);
        for _ in 0..500 {
            let round = generate(Difficulty::Hard, &mut rng);
            assert!(round.a.is_reduced(), "{} not reduced", round.a);
            assert!(round.b.is_reduced(), "{} not reduced", round.b);
        }
    }

    #[test]
    fn test_prose_is_never_empty() {
        let mut rng = DeterministicRng::new(55);
        for strategy in Strategy::ALL {
            for _ in 0..50 {
                let round = generate_with(strategy, &mut rng);
                assert!(!round.hint.is_empty());
                assert!(!round.explanation.is_empty());
            }
        }
    }

    #[test]
    fn test_hints_are_per_strategy_constants() {
        let mut rng = DeterministicRng::new(77);
        let expected = [
            (
                Strategy::SameDenominator,
                "Même dénominateur → compare les numérateurs.",
            ),
            (
                Strategy::EquivalentFractions,
                "Transforme en fractions équivalentes (même dénominateur).",
            ),
            (
                Strategy::NearOne,
                "Proche de 1 : compare ce qui manque pour faire 1.",
            ),
            (
                Strategy::HalfReference,
                "Repère 1/2 : au-dessus de 1/2 est plus grand.",
            ),
            (
                Strategy::CrossMultiply,
                "Astuce : mets au même dénominateur ou compare par produit croisé.",
            ),
        ];
        for (strategy, hint) in expected {
            let round = generate_with(strategy, &mut rng);
            assert_eq!(round.hint, hint);
            assert_eq!(round.strategy, strategy);
        }
    }

    #[test]
    fn test_tie_free_strategies_never_tie() {
        let tie_free = [
            Strategy::SameDenominator,
            Strategy::EquivalentFractions,
            Strategy::NearOne,
            Strategy::HalfReference,
        ];
        let mut rng = DeterministicRng::new(4242);
        for strategy in tie_free {
            for _ in 0..500 {
                let round = generate_with(strategy, &mut rng);
                assert_ne!(
                    round.correct,
                    Choice::Equal,
                    "{strategy:?} built a tie: {} vs {}",
                    round.a,
                    round.b
                );
            }
        }
    }

    #[test]
    fn test_half_reference_answer_is_always_b() {
        // The low operand is placed first by construction.
        let mut rng = DeterministicRng::new(606);
        for _ in 0..500 {
            let round = generate_with(Strategy::HalfReference, &mut rng);
            assert_eq!(round.correct, Choice::B);
        }
    }

    #[test]
    fn test_equal_values_are_judged_equal() {
        // 2/4 and 3/6 both reduce to 1/2: the judge must label the round
        // Equal rather than reject it.
        let draft = Draft {
            a: Fraction::new(2, 4),
            b: Fraction::new(3, 6),
            hint: "x",
            explanation: "y".to_string(),
        };
        let round = finish(Strategy::CrossMultiply, draft);
        assert_eq!(round.correct, Choice::Equal);
        assert_eq!(round.a, Fraction::new(1, 2));
        assert_eq!(round.b, Fraction::new(1, 2));
    }

    #[test]
    fn test_same_denominator_explanation_counts_parts() {
        let mut rng = DeterministicRng::new(11);
        let round = generate_with(Strategy::SameDenominator, &mut rng);
        assert!(round.explanation.contains("parts"));
        assert!(round.explanation.starts_with("Même dénominateur"));
    }

    #[test]
    fn test_cross_multiply_explanation_shows_products() {
        let mut rng = DeterministicRng::new(12);
        let round = generate_with(Strategy::CrossMultiply, &mut rng);
        assert!(round.explanation.starts_with("Produit croisé"));
        assert!(round.explanation.contains('×'));
    }
}

//! Exact Rational Arithmetic
//!
//! This module provides exact fraction comparison for the quiz engine.
//! All operations use integer arithmetic only - no floats anywhere.
//!
//! ## Representation
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Fraction = numerator / denominator (two i64 fields)        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Normalized form: lowest terms, denominator > 0             │
//! │                                                             │
//! │  Comparison: sign of a.num*b.den - b.num*a.den              │
//! │  computed in i128, so it is exact for any i64 operands.     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why exact arithmetic?
//!
//! - 1/3 vs 2/6 must compare equal; floats cannot promise that
//! - The correct answer of a round is *derived* from this comparison,
//!   never from the generation strategy's narrative
//! - Cross-multiplication in i128 cannot overflow for i64 operands
//! - Classroom values stay in single digits; the wide math is headroom

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Greatest common divisor (Euclidean algorithm on magnitudes).
///
/// Returns at least 1 so division by the result is always defined;
/// the degenerate `gcd(0, 0)` collapses to 1 instead of 0.
///
/// # Example
/// ```
/// use fraction_duel::core::fraction::gcd;
/// assert_eq!(gcd(8, 12), 4);
/// assert_eq!(gcd(7, 0), 7);
/// assert_eq!(gcd(0, 0), 1);
/// ```
#[inline]
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut x, mut y) = (a.unsigned_abs(), b.unsigned_abs());
    while y != 0 {
        let r = x % y;
        x = y;
        y = r;
    }
    x.max(1) as i64
}

/// An exact rational number.
///
/// `PartialEq`/`Eq` are structural (field-wise): `1/2 != 2/4` as values of
/// this type even though they are equal as rationals. Use [`Fraction::compare`]
/// for value comparison; there is deliberately no `Ord` impl, because a
/// value-based order would disagree with the structural `Eq`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    /// Numerator (any sign).
    pub num: i64,
    /// Denominator (nonzero; conventionally positive after [`Fraction::reduce`]).
    pub den: i64,
}

impl Fraction {
    /// Create a fraction without reducing it.
    ///
    /// The denominator must be nonzero; the quiz generator only builds
    /// denominators from small positive pools, so this is not re-checked
    /// on every call.
    #[inline]
    pub const fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    /// Reduce to lowest terms with a positive denominator.
    ///
    /// Idempotent and value-preserving: `f.reduce().reduce() == f.reduce()`
    /// and `f.compare(f.reduce()) == Ordering::Equal`.
    ///
    /// # Example
    /// ```
    /// use fraction_duel::core::fraction::Fraction;
    /// assert_eq!(Fraction::new(4, 6).reduce(), Fraction::new(2, 3));
    /// assert_eq!(Fraction::new(3, -6).reduce(), Fraction::new(-1, 2));
    /// assert_eq!(Fraction::new(0, 5).reduce(), Fraction::new(0, 1));
    /// ```
    #[inline]
    pub fn reduce(self) -> Self {
        let g = gcd(self.num, self.den);
        let (mut num, mut den) = (self.num / g, self.den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        Self { num, den }
    }

    /// Compare two fractions by value: the sign of
    /// `self.num * other.den - other.num * self.den`.
    ///
    /// Exact for any i64 operands (products taken in i128). Assumes positive
    /// denominators, the normalized form every generated operand is in.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    /// use fraction_duel::core::fraction::Fraction;
    /// let half = Fraction::new(1, 2);
    /// let three_quarters = Fraction::new(3, 4);
    /// assert_eq!(half.compare(three_quarters), Ordering::Less);
    /// assert_eq!(half.compare(Fraction::new(2, 4)), Ordering::Equal);
    /// ```
    #[inline]
    pub fn compare(self, other: Self) -> Ordering {
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        lhs.cmp(&rhs)
    }

    /// True if already in lowest terms with a positive denominator.
    #[inline]
    pub fn is_reduced(self) -> bool {
        self.den > 0 && gcd(self.num, self.den) == 1
    }
}

impl fmt::Display for Fraction {
    /// Renders as `numerator/denominator` with no reduction side effect.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gcd_basics() {
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(8, 12), 4);
        assert_eq!(gcd(5, 7), 1);
        assert_eq!(gcd(6, 6), 6);
        // One-sided zero: the other magnitude
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(9, 0), 9);
        // Degenerate zero pair collapses to 1, never 0
        assert_eq!(gcd(0, 0), 1);
        // Sign is ignored
        assert_eq!(gcd(-12, 8), 4);
        assert_eq!(gcd(12, -8), 4);
    }

    #[test]
    fn test_reduce_lowest_terms() {
        assert_eq!(Fraction::new(4, 8).reduce(), Fraction::new(1, 2));
        assert_eq!(Fraction::new(6, 9).reduce(), Fraction::new(2, 3));
        assert_eq!(Fraction::new(5, 7).reduce(), Fraction::new(5, 7));
        assert_eq!(Fraction::new(10, 10).reduce(), Fraction::new(1, 1));
        assert_eq!(Fraction::new(0, 12).reduce(), Fraction::new(0, 1));
    }

    #[test]
    fn test_reduce_sign_normalization() {
        // Denominator sign always moves to the numerator
        assert_eq!(Fraction::new(1, -2).reduce(), Fraction::new(-1, 2));
        assert_eq!(Fraction::new(-1, -2).reduce(), Fraction::new(1, 2));
        assert_eq!(Fraction::new(-4, 6).reduce(), Fraction::new(-2, 3));
    }

    #[test]
    fn test_compare_orders_by_value() {
        let a = Fraction::new(1, 2);
        let b = Fraction::new(2, 3);
        assert_eq!(a.compare(b), Ordering::Less);
        assert_eq!(b.compare(a), Ordering::Greater);
        assert_eq!(a.compare(a), Ordering::Equal);

        // Equal values in different terms
        assert_eq!(
            Fraction::new(2, 4).compare(Fraction::new(3, 6)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_is_exact_not_float() {
        // 1/3 vs 333333/1000000: floats would call these equal at f32
        // precision; the cross product must not.
        let third = Fraction::new(1, 3);
        let near = Fraction::new(333_333, 1_000_000);
        assert_eq!(third.compare(near), Ordering::Greater);
    }

    #[test]
    fn test_structural_eq_vs_value_eq() {
        let half = Fraction::new(1, 2);
        let two_quarters = Fraction::new(2, 4);
        assert_ne!(half, two_quarters, "structural equality is field-wise");
        assert_eq!(
            half.compare(two_quarters),
            Ordering::Equal,
            "value comparison sees through the representation"
        );
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Fraction::new(3, 4).to_string(), "3/4");
        assert_eq!(Fraction::new(12, 8).to_string(), "12/8", "no hidden reduction");
        assert_eq!(Fraction::new(-1, 2).to_string(), "-1/2");
    }

    #[test]
    fn test_is_reduced() {
        assert!(Fraction::new(3, 4).is_reduced());
        assert!(Fraction::new(0, 1).is_reduced());
        assert!(!Fraction::new(2, 4).is_reduced());
        assert!(!Fraction::new(1, -2).is_reduced(), "negative denominator");
    }

    proptest! {
        #[test]
        fn prop_compare_antisymmetric(
            an in -1_000_000i64..1_000_000,
            ad in 1i64..1_000_000,
            bn in -1_000_000i64..1_000_000,
            bd in 1i64..1_000_000,
        ) {
            let a = Fraction::new(an, ad);
            let b = Fraction::new(bn, bd);
            prop_assert_eq!(a.compare(b), b.compare(a).reverse());
        }

        #[test]
        fn prop_reduce_idempotent_and_value_preserving(
            n in -1_000_000i64..1_000_000,
            d in 1i64..1_000_000,
        ) {
            let f = Fraction::new(n, d);
            let r = f.reduce();
            prop_assert!(r.is_reduced());
            prop_assert_eq!(r.reduce(), r);
            prop_assert_eq!(f.compare(r), Ordering::Equal);
        }

        #[test]
        fn prop_gcd_divides_both(
            a in 1i64..1_000_000,
            b in 1i64..1_000_000,
        ) {
            let g = gcd(a, b);
            prop_assert!(g >= 1);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }
    }
}

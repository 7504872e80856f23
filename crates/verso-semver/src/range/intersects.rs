//! Overlap checks between comparators and ranges

use std::cmp::Ordering;

use super::{Comparator, ComparatorSet, Operator, Range};
use crate::compare::compare;

impl Comparator {
    /// Check if some version could satisfy both comparators
    pub fn intersects(&self, other: &Comparator) -> bool {
        let (
            Comparator::Bound {
                operator: op0,
                version: v0,
            },
            Comparator::Bound {
                operator: op1,
                version: v1,
            },
        ) = (self, other)
        else {
            return true;
        };

        match (op0, op1) {
            (Operator::Equal, _) => exact_satisfies(self, other),
            (_, Operator::Equal) => exact_satisfies(other, self),
            (Operator::NotEqual, _) | (_, Operator::NotEqual) => true,
            _ => {
                let ordering = compare(v0, v1);
                let inclusive = |op: &Operator| {
                    matches!(op, Operator::GreaterOrEqual | Operator::LessOrEqual)
                };

                (op0.is_greater() && op1.is_greater())
                    || (op0.is_less() && op1.is_less())
                    || (ordering == Ordering::Equal && inclusive(op0) && inclusive(op1))
                    || (ordering == Ordering::Less && op0.is_greater() && op1.is_less())
                    || (ordering == Ordering::Greater && op0.is_less() && op1.is_greater())
            }
        }
    }
}

/// An exact comparator intersects when its version satisfies the other one
fn exact_satisfies(exact: &Comparator, other: &Comparator) -> bool {
    match exact.version() {
        Some(version) => ComparatorSet::new(vec![other.clone()]).test(version),
        None => true,
    }
}

/// Check if every pair of comparators in the set intersects
pub fn comparators_satisfiable(comparators: &[Comparator]) -> bool {
    comparators.iter().enumerate().all(|(i, c0)| {
        comparators[i + 1..]
            .iter()
            .all(|c1| c0.intersects(c1))
    })
}

impl Range {
    /// Check if at least one set of the range could match something
    pub fn is_satisfiable(&self) -> bool {
        self.sets()
            .iter()
            .any(|set| comparators_satisfiable(set.comparators()))
    }

    /// Check if some version could satisfy both ranges
    pub fn intersects(&self, other: &Range) -> bool {
        if !self.is_satisfiable() || !other.is_satisfiable() {
            return false;
        }
        self.sets().iter().any(|s0| {
            other.sets().iter().any(|s1| {
                s0.comparators()
                    .iter()
                    .all(|c0| s1.comparators().iter().all(|c1| c0.intersects(c1)))
            })
        })
    }
}

/// Check if some version could satisfy both `r0` and `r1`
pub fn range_intersects(r0: &Range, r1: &Range) -> bool {
    r0.intersects(r1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Comparator {
        s.parse().unwrap()
    }

    fn r(s: &str) -> Range {
        s.parse().unwrap()
    }

    #[test]
    fn test_comparator_intersects() {
        let cases = [
            (">1.0.0", "<1.0.0", false),
            (">=1.0.0", "<=1.0.0", true),
            ("<=1.0.0", ">=1.0.0", true),
            (">=1.0.0", "<1.0.0", false),
            (">1.0.0", "<2.0.0", true),
            ("<2.0.0", ">1.0.0", true),
            ("<1.0.0", ">2.0.0", false),
            (">2.0.0", "<1.0.0", false),
            (">=1.0.0", ">=2.0.0", true),
            ("<1.0.0", "<=3.0.0", true),
            ("1.0.0", ">=1.0.0", true),
            ("1.0.0", ">1.0.0", false),
            ("<=1.0.0", "1.0.0", true),
            ("1.0.0-beta", ">=1.0.0", false),
            ("1.0.0-beta", ">=1.0.0-alpha", true),
            ("1.0.0", "1.0.0", true),
            ("1.0.0", "1.0.1", false),
            ("*", "1.0.0", true),
            (">=1.0.0", "*", true),
            ("!=1.0.0", "1.0.0", false),
            ("!=1.0.0", "1.0.1", true),
            ("!=1.0.0", "<1.0.0", true),
            ("!=1.0.0", "!=1.0.0", true),
        ];
        for (a, b, expected) in cases {
            assert_eq!(c(a).intersects(&c(b)), expected, "{} and {}", a, b);
            assert_eq!(c(b).intersects(&c(a)), expected, "{} and {}", b, a);
        }
    }

    #[test]
    fn test_comparators_satisfiable() {
        assert!(comparators_satisfiable(&[c(">=1.0.0"), c("<2.0.0")]));
        assert!(comparators_satisfiable(&[c(">=1.0.0")]));
        assert!(comparators_satisfiable(&[]));
        assert!(!comparators_satisfiable(&[c("<1.0.0"), c(">2.0.0")]));
        assert!(!comparators_satisfiable(&[c(">=1.0.0"), c("<2.0.0"), c("2.5.0")]));
    }

    #[test]
    fn test_range_intersects() {
        let cases = [
            ("1.3.0 || <1.0.0 >2.0.0", "1.3.0 || <1.0.0 >2.0.0", true),
            ("<1.0.0 >2.0.0", ">0.0.0", false),
            ("^1.2.3", "~1.3", true),
            ("~1.2", "~1.3", false),
            ("1.x", "2.x", false),
            ("1.x || 3.x", "2.x || 3.1", true),
            ("1.0.0 - 2.0.0", "2.0.0 - 3.0.0", true),
            ("1.0.0 - 2.0.0", ">2.0.0", false),
            ("*", ">=1.0.0", true),
            ("", "1.2.3", true),
            (">=1.2.0 <1.3.0", "1.2.7", true),
            ("!=1.0.0", "1.0.0", false),
            ("!=1.0.0", "^1.0.0", true),
        ];
        for (a, b, expected) in cases {
            assert_eq!(range_intersects(&r(a), &r(b)), expected, "{} and {}", a, b);
            assert_eq!(range_intersects(&r(b), &r(a)), expected, "{} and {}", b, a);
        }
    }

    #[test]
    fn test_is_satisfiable() {
        assert!(r("^1.0.0").is_satisfiable());
        assert!(r("<1.0.0 >2.0.0 || 3.x").is_satisfiable());
        assert!(!r("<1.0.0 >2.0.0").is_satisfiable());
    }
}

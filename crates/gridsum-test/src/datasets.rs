//! Fixed datasets with known two-sum outcomes.
//!
//! # Example
//!
//! ```
//! use gridsum_test::datasets::classic;
//!
//! let fixture = classic();
//! assert_eq!(fixture.target, 9);
//! assert_eq!(fixture.expected, Some((0, 1)));
//! ```

use gridsum_core::{Dataset, Target};

/// A dataset, a target and the brute-force answer.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub dataset: Dataset,
    pub target: Target,
    /// Lexicographically first qualifying pair, if any.
    pub expected: Option<(usize, usize)>,
}

impl Fixture {
    pub fn new(values: Vec<i64>, target: Target, expected: Option<(usize, usize)>) -> Self {
        Self {
            dataset: Dataset::new(values),
            target,
            expected,
        }
    }
}

/// `[2, 7, 11, 15]`, target 9: found at `(0, 1)`.
pub fn classic() -> Fixture {
    Fixture::new(vec![2, 7, 11, 15], 9, Some((0, 1)))
}

/// Five surplus readings with no pair summing to zero.
pub fn surplus_regression() -> Fixture {
    Fixture::new(vec![25, -48, 56, -94, 33], 0, None)
}

/// Two readings that sum to the target.
pub fn two_elements() -> Fixture {
    Fixture::new(vec![-40, 40], 0, Some((0, 1)))
}

/// No readings at all.
pub fn empty() -> Fixture {
    Fixture::new(Vec::new(), 0, None)
}

/// Duplicates where the solvers legitimately return different pairs.
///
/// Brute force returns `(0, 2)`; the hash table returns `(1, 2)`.
pub fn duplicates() -> Fixture {
    Fixture::new(vec![3, 3, 1, 3], 4, Some((0, 2)))
}

/// Readings at the edges of the i64 range.
pub fn extremes() -> Fixture {
    Fixture::new(vec![i64::MAX, 5, i64::MIN], -1, Some((0, 2)))
}

/// `n` readings where no pair sums to zero (all strictly positive).
///
/// Forces both solvers through a full scan.
pub fn worst_case(n: usize) -> Dataset {
    (1..=n as i64).collect()
}

/// Every fixture with a known brute-force answer.
pub fn all() -> Vec<Fixture> {
    vec![
        classic(),
        surplus_regression(),
        two_elements(),
        empty(),
        duplicates(),
        extremes(),
    ]
}

//! Two-sum search outcomes.

use std::fmt;

use crate::dataset::{Dataset, Target};

/// Returns true if `a + b == target`, evaluated without overflow.
///
/// # Example
///
/// ```
/// use gridsum_core::sums_to;
///
/// assert!(sums_to(2, 7, 9));
/// assert!(sums_to(i64::MAX, i64::MIN, -1));
/// assert!(!sums_to(i64::MAX, 1, i64::MIN));
/// ```
#[inline]
pub fn sums_to(a: i64, b: i64, target: Target) -> bool {
    i128::from(a) + i128::from(b) == i128::from(target)
}

/// Two distinct positions whose readings sum to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairMatch {
    /// Earlier position.
    pub first_index: usize,
    /// Later position.
    pub second_index: usize,
    /// Reading at `first_index`.
    pub first_value: i64,
    /// Reading at `second_index`.
    pub second_value: i64,
}

impl PairMatch {
    /// Creates a match from two positions and their readings.
    pub fn new(first_index: usize, second_index: usize, first_value: i64, second_value: i64) -> Self {
        Self {
            first_index,
            second_index,
            first_value,
            second_value,
        }
    }

    /// Returns `(first_index, second_index)`.
    pub fn indices(&self) -> (usize, usize) {
        (self.first_index, self.second_index)
    }

    /// Returns `(first_value, second_value)`.
    pub fn values(&self) -> (i64, i64) {
        (self.first_value, self.second_value)
    }
}

impl fmt::Display for PairMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]={} + [{}]={}",
            self.first_index, self.first_value, self.second_index, self.second_value
        )
    }
}

/// Outcome of one two-sum search.
///
/// # Example
///
/// ```
/// use gridsum_core::{Dataset, PairMatch, SolveResult};
///
/// let dataset = Dataset::new(vec![2, 7, 11, 15]);
/// let result = SolveResult::Found(PairMatch::new(0, 1, 2, 7));
///
/// assert!(result.is_found());
/// assert_eq!(result.indices(), Some((0, 1)));
/// assert!(result.is_valid_for(&dataset, 9));
/// assert!(!SolveResult::NotFound.is_found());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SolveResult {
    /// A qualifying pair.
    Found(PairMatch),
    /// No two readings sum to the target.
    #[default]
    NotFound,
}

impl SolveResult {
    /// Returns true if a pair was found.
    pub fn is_found(&self) -> bool {
        matches!(self, SolveResult::Found(_))
    }

    /// Returns the matched pair, if any.
    pub fn pair(&self) -> Option<&PairMatch> {
        match self {
            SolveResult::Found(pair) => Some(pair),
            SolveResult::NotFound => None,
        }
    }

    /// Returns the matched positions, if any.
    pub fn indices(&self) -> Option<(usize, usize)> {
        self.pair().map(PairMatch::indices)
    }

    /// Checks the result invariant against the searched input.
    ///
    /// A found pair must reference distinct ascending positions inside the
    /// dataset, carry their actual readings, and sum exactly to `target`.
    /// `NotFound` is always structurally valid.
    pub fn is_valid_for(&self, dataset: &Dataset, target: Target) -> bool {
        let Some(pair) = self.pair() else {
            return true;
        };
        pair.first_index < pair.second_index
            && dataset.get(pair.first_index) == Some(pair.first_value)
            && dataset.get(pair.second_index) == Some(pair.second_value)
            && sums_to(pair.first_value, pair.second_value, target)
    }
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveResult::Found(pair) => write!(f, "{}", pair),
            SolveResult::NotFound => f.write_str("not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pairs_are_rejected() {
        let dataset = Dataset::new(vec![2, 7, 11, 15]);

        // Wrong sum.
        let wrong_sum = SolveResult::Found(PairMatch::new(0, 2, 2, 11));
        assert!(!wrong_sum.is_valid_for(&dataset, 9));

        // Same position twice.
        let same = SolveResult::Found(PairMatch::new(1, 1, 7, 7));
        assert!(!same.is_valid_for(&dataset, 14));

        // Out of bounds.
        let outside = SolveResult::Found(PairMatch::new(0, 9, 2, 7));
        assert!(!outside.is_valid_for(&dataset, 9));
    }

    #[test]
    fn test_display() {
        let found = SolveResult::Found(PairMatch::new(0, 1, 2, 7));
        assert_eq!(found.to_string(), "[0]=2 + [1]=7");
        assert_eq!(SolveResult::NotFound.to_string(), "not found");
    }
}

//! Single-pass complement lookup.

use std::collections::HashMap;

use gridsum_core::{Dataset, PairMatch, SolveResult, Target};

use crate::scope::{Interrupted, SolveScope};
use crate::solver::{Complexity, TwoSumSolver};
use crate::termination::Termination;

/// Elements scanned between termination polls.
const CHECK_INTERVAL: usize = 16_384;

/// Scans left to right, remembering the last index of every reading seen.
///
/// At position `j` the complement `target - dataset[j]` is looked up among
/// earlier readings; the first `j` with a partner wins. A repeated reading
/// overwrites the stored index, so with duplicates the returned pair can
/// differ from [`BruteForceSolver`](crate::BruteForceSolver)'s. Both pairs
/// are valid.
///
/// # Example
///
/// ```
/// use gridsum_core::Dataset;
/// use gridsum_solver::{BruteForceSolver, HashTableSolver, TwoSumSolver};
///
/// let dataset = Dataset::new(vec![3, 3, 1, 3]);
///
/// // Brute force pairs the first two 3s and stops.
/// assert_eq!(BruteForceSolver.solve(&dataset, 6).indices(), Some((0, 1)));
/// // The hash table also completes at j = 1, partnered with index 0.
/// assert_eq!(HashTableSolver.solve(&dataset, 6).indices(), Some((0, 1)));
///
/// // For target 4 brute force finds (0, 2); the hash table sees 1 at j = 2
/// // and looks up 3, whose latest index is 1.
/// assert_eq!(BruteForceSolver.solve(&dataset, 4).indices(), Some((0, 2)));
/// assert_eq!(HashTableSolver.solve(&dataset, 4).indices(), Some((1, 2)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HashTableSolver;

impl TwoSumSolver for HashTableSolver {
    fn name(&self) -> &'static str {
        "Hash Table"
    }

    fn complexity(&self) -> Complexity {
        Complexity {
            time: "O(n)",
            space: "O(n)",
        }
    }

    fn solve_with<T: Termination>(
        &self,
        dataset: &Dataset,
        target: Target,
        termination: &T,
    ) -> Result<SolveResult, Interrupted> {
        let mut scope = SolveScope::start();
        let mut seen: HashMap<i64, usize> = HashMap::new();
        let target = i128::from(target);

        for (j, &value) in dataset.values().iter().enumerate() {
            if j % CHECK_INTERVAL == 0 && scope.should_stop(termination) {
                return Err(scope.interrupted(termination));
            }

            // A complement outside the i64 range cannot have been seen.
            if let Ok(complement) = i64::try_from(target - i128::from(value)) {
                if let Some(&i) = seen.get(&complement) {
                    return Ok(SolveResult::Found(PairMatch::new(i, j, complement, value)));
                }
            }
            seen.insert(value, j);
        }

        Ok(SolveResult::NotFound)
    }
}

//! Exhaustive pair scan.

use gridsum_core::{Dataset, PairMatch, SolveResult, Target};

use crate::scope::{Interrupted, SolveScope};
use crate::solver::{Complexity, TwoSumSolver};
use crate::termination::Termination;

/// Tests every pair `(i, j)` with `i < j`, ascending `i` then ascending `j`.
///
/// Always returns the lexicographically first qualifying pair. Termination is
/// polled once per outer index.
///
/// # Example
///
/// ```
/// use gridsum_core::{Dataset, SolveResult};
/// use gridsum_solver::{BruteForceSolver, TwoSumSolver};
///
/// // Both (0, 3) and (1, 2) sum to 5; the scan order picks (0, 3).
/// let dataset = Dataset::new(vec![1, 2, 3, 4]);
/// assert_eq!(BruteForceSolver.solve(&dataset, 5).indices(), Some((0, 3)));
/// assert_eq!(BruteForceSolver.solve(&dataset, 100), SolveResult::NotFound);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSolver;

impl TwoSumSolver for BruteForceSolver {
    fn name(&self) -> &'static str {
        "Brute Force"
    }

    fn complexity(&self) -> Complexity {
        Complexity {
            time: "O(n²)",
            space: "O(1)",
        }
    }

    fn solve_with<T: Termination>(
        &self,
        dataset: &Dataset,
        target: Target,
        termination: &T,
    ) -> Result<SolveResult, Interrupted> {
        let mut scope = SolveScope::start();
        let values = dataset.values();
        let target = i128::from(target);

        for (i, &first) in values.iter().enumerate() {
            if scope.should_stop(termination) {
                return Err(scope.interrupted(termination));
            }

            let needed = target - i128::from(first);
            for (offset, &second) in values[i + 1..].iter().enumerate() {
                if i128::from(second) == needed {
                    let j = i + 1 + offset;
                    return Ok(SolveResult::Found(PairMatch::new(i, j, first, second)));
                }
            }
        }

        Ok(SolveResult::NotFound)
    }
}

//! The two-sum solver capability.

use std::fmt::Debug;

use gridsum_core::{Dataset, SolveResult, Target};

use crate::scope::Interrupted;
use crate::termination::{Termination, Unbounded};

/// Asymptotic cost labels of a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    /// Time complexity, e.g. `O(n²)`.
    pub time: &'static str,
    /// Auxiliary space complexity, e.g. `O(1)`.
    pub space: &'static str,
}

/// Finds two positions of a dataset whose readings sum to a target.
///
/// Implementations are stateless; one value can solve any number of
/// datasets. The benchmark is generic over this trait, so each solver is
/// monomorphized into its own measurement loop.
pub trait TwoSumSolver: Debug {
    /// Display name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Asymptotic cost of the search.
    fn complexity(&self) -> Complexity;

    /// Searches `dataset`, polling `termination` at coarse intervals.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] if `termination` fires before a verdict.
    fn solve_with<T: Termination>(
        &self,
        dataset: &Dataset,
        target: Target,
        termination: &T,
    ) -> Result<SolveResult, Interrupted>;

    /// Searches `dataset` to completion.
    fn solve(&self, dataset: &Dataset, target: Target) -> SolveResult {
        // Unbounded never fires, so the error arm is unreachable.
        self.solve_with(dataset, target, &Unbounded)
            .unwrap_or_default()
    }
}

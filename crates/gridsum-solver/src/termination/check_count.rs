//! Check count termination.

use super::Termination;
use crate::scope::SolveScope;

/// Terminates once the solver has polled a fixed number of times.
///
/// Deterministic counterpart of [`TimeTermination`](super::TimeTermination).
///
/// # Example
///
/// ```
/// use gridsum_solver::termination::CheckCountTermination;
///
/// // Stop on the third poll
/// let term = CheckCountTermination::new(3);
/// ```
#[derive(Debug, Clone)]
pub struct CheckCountTermination {
    limit: u64,
}

impl CheckCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for CheckCountTermination {
    fn is_terminated(&self, scope: &SolveScope) -> bool {
        scope.check_count() >= self.limit
    }
}

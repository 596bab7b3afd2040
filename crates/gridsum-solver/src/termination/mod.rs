//! Termination conditions for solver invocations.

mod check_count;
mod time;

use std::fmt::Debug;
use std::time::Duration;

use crate::scope::SolveScope;

pub use check_count::CheckCountTermination;
pub use time::TimeTermination;

/// Trait for determining when a search should give up.
///
/// Solvers poll this at coarse intervals; implementations must be cheap.
pub trait Termination: Debug {
    /// Returns true if the search should stop.
    fn is_terminated(&self, scope: &SolveScope) -> bool;

    /// Wall-clock ceiling, if this termination is time based.
    fn time_limit(&self) -> Option<Duration> {
        None
    }
}

/// Never terminates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl Termination for Unbounded {
    fn is_terminated(&self, _scope: &SolveScope) -> bool {
        false
    }
}

impl<T: Termination + ?Sized> Termination for &T {
    fn is_terminated(&self, scope: &SolveScope) -> bool {
        (**self).is_terminated(scope)
    }

    fn time_limit(&self) -> Option<Duration> {
        (**self).time_limit()
    }
}

#[cfg(test)]
mod tests;

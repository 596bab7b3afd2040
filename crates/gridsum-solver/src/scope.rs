//! Per-invocation solve scope.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::termination::Termination;

/// Bookkeeping for a single solver invocation.
///
/// Tracks the start instant and how often the solver polled its termination.
#[derive(Debug)]
pub struct SolveScope {
    start_time: Instant,
    check_count: u64,
}

impl SolveScope {
    /// Starts a scope at the current instant.
    pub fn start() -> Self {
        Self {
            start_time: Instant::now(),
            check_count: 0,
        }
    }

    /// Returns the elapsed time since the scope started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns how many termination polls were made.
    pub fn check_count(&self) -> u64 {
        self.check_count
    }

    /// Polls `termination`, counting the check.
    pub fn should_stop<T: Termination>(&mut self, termination: &T) -> bool {
        self.check_count += 1;
        termination.is_terminated(self)
    }

    /// Builds the interruption reported when a solver gives up.
    pub fn interrupted<T: Termination>(&self, termination: &T) -> Interrupted {
        Interrupted {
            elapsed: self.elapsed(),
            limit: termination.time_limit(),
            checks: self.check_count,
        }
    }
}

/// A solve stopped by its termination before reaching a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("solve interrupted after {elapsed:?} ({checks} termination checks)")]
pub struct Interrupted {
    /// Time spent before stopping.
    pub elapsed: Duration,
    /// Wall-clock ceiling of the termination, if time based.
    pub limit: Option<Duration>,
    /// Termination polls made before stopping.
    pub checks: u64,
}

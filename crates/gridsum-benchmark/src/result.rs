//! Benchmark result types.

use std::time::Duration;

use gridsum_core::SolveResult;

/// Result of a single benchmark run.
///
/// Contains timing and outcome for one solver execution.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRun {
    /// Run index (0-based).
    pub run_index: usize,
    /// Wall-clock solve time.
    pub solve_time: Duration,
    /// What the solver returned.
    pub outcome: SolveResult,
}

/// Aggregated results from multiple benchmark runs.
///
/// Contains individual runs and computed statistics.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Solver name.
    pub solver_name: String,
    /// Number of readings in the benchmarked dataset.
    pub dataset_len: usize,
    /// Individual runs.
    pub runs: Vec<BenchmarkRun>,
}

impl BenchmarkResult {
    /// Creates a new benchmark result.
    pub fn new(solver_name: impl Into<String>, dataset_len: usize) -> Self {
        Self {
            solver_name: solver_name.into(),
            dataset_len,
            runs: Vec::new(),
        }
    }

    /// Adds a run to the results.
    pub fn add_run(&mut self, run: BenchmarkRun) {
        self.runs.push(run);
    }

    /// Returns the number of runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Returns the outcome of the last run.
    ///
    /// Solvers are deterministic, so every run returns the same outcome;
    /// repeats only reduce timing noise.
    pub fn final_outcome(&self) -> SolveResult {
        self.runs.last().map(|r| r.outcome).unwrap_or_default()
    }

    /// Returns the average solve time.
    ///
    /// # Example
    ///
    /// ```
    /// use gridsum_benchmark::{BenchmarkResult, BenchmarkRun};
    /// use gridsum_core::SolveResult;
    /// use std::time::Duration;
    ///
    /// let mut result = BenchmarkResult::new("Hash Table", 100);
    /// result.add_run(BenchmarkRun {
    ///     run_index: 0,
    ///     solve_time: Duration::from_millis(100),
    ///     outcome: SolveResult::NotFound,
    /// });
    /// result.add_run(BenchmarkRun {
    ///     run_index: 1,
    ///     solve_time: Duration::from_millis(200),
    ///     outcome: SolveResult::NotFound,
    /// });
    ///
    /// assert_eq!(result.avg_solve_time(), Duration::from_millis(150));
    /// assert_eq!(result.min_solve_time(), Duration::from_millis(100));
    /// assert_eq!(result.max_solve_time(), Duration::from_millis(200));
    /// ```
    pub fn avg_solve_time(&self) -> Duration {
        if self.runs.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.runs.iter().map(|r| r.solve_time).sum();
        let nanos = total.as_nanos() / self.runs.len() as u128;
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Returns the minimum solve time.
    pub fn min_solve_time(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.solve_time)
            .min()
            .unwrap_or(Duration::ZERO)
    }

    /// Returns the maximum solve time.
    pub fn max_solve_time(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.solve_time)
            .max()
            .unwrap_or(Duration::ZERO)
    }
}

//! Benchmark runner.

use std::time::{Duration, Instant};

use gridsum_core::{Dataset, GridSumError, Result, SolveResult, Target};
use gridsum_solver::{TimeTermination, TwoSumSolver};
use tracing::{debug, warn};

use crate::config::BenchmarkConfig;
use crate::result::{BenchmarkResult, BenchmarkRun};

/// Zero-erasure benchmark runner.
///
/// Executes one solver against one dataset several times, timing each
/// execution. The solver is a concrete generic type parameter, so each
/// solver gets its own monomorphized measurement loop.
///
/// # Example
///
/// ```
/// use gridsum_benchmark::{Benchmark, BenchmarkConfig};
/// use gridsum_core::Dataset;
/// use gridsum_solver::HashTableSolver;
///
/// let benchmark = Benchmark::new(BenchmarkConfig::new("demo").with_run_count(3), HashTableSolver);
/// let result = benchmark.run(&Dataset::new(vec![2, 7, 11, 15]), 9).unwrap();
///
/// assert_eq!(result.run_count(), 3);
/// assert_eq!(result.final_outcome().indices(), Some((0, 1)));
/// ```
#[derive(Debug)]
pub struct Benchmark<S: TwoSumSolver> {
    config: BenchmarkConfig,
    solver: S,
}

impl<S: TwoSumSolver> Benchmark<S> {
    /// Creates a new benchmark.
    pub fn new(config: BenchmarkConfig, solver: S) -> Self {
        Self { config, solver }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Returns the solver.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Runs the benchmark and returns aggregated results.
    ///
    /// Executes warmup runs first (not measured), then measurement runs.
    ///
    /// # Errors
    ///
    /// Returns [`GridSumError::InvalidConfiguration`] if the run count is 0
    /// and [`GridSumError::BenchmarkTimeout`] if any execution exceeds the
    /// configured time limit.
    pub fn run(&self, dataset: &Dataset, target: Target) -> Result<BenchmarkResult> {
        self.config.validate()?;

        for _ in 0..self.config.warmup_count() {
            self.run_once(dataset, target)?;
        }

        let mut result = BenchmarkResult::new(self.solver.name(), dataset.len());
        for run_index in 0..self.config.run_count() {
            let (outcome, solve_time) = self.run_once(dataset, target)?;
            result.add_run(BenchmarkRun {
                run_index,
                solve_time,
                outcome,
            });
        }

        debug!(
            event = "solver_end",
            solver = self.solver.name(),
            size = dataset.len() as u64,
            runs = result.run_count() as u64,
            mean_us = result.avg_solve_time().as_micros() as u64,
            found = result.final_outcome().is_found(),
        );

        Ok(result)
    }

    /// Executes and times a single run.
    fn run_once(&self, dataset: &Dataset, target: Target) -> Result<(SolveResult, Duration)> {
        let start = Instant::now();
        let outcome = match self.config.time_limit() {
            Some(limit) => self
                .solver
                .solve_with(dataset, target, &TimeTermination::new(limit))
                .map_err(|_| self.timeout(limit, dataset.len()))?,
            None => self.solver.solve(dataset, target),
        };
        Ok((outcome, start.elapsed()))
    }

    fn timeout(&self, limit: Duration, size: usize) -> GridSumError {
        warn!(
            event = "solver_timeout",
            solver = self.solver.name(),
            size = size as u64,
            limit_ms = limit.as_millis() as u64,
        );
        GridSumError::BenchmarkTimeout {
            solver: self.solver.name().to_string(),
            limit,
            size,
        }
    }
}

//! Side-by-side comparison of the two solvers across dataset sizes.

use std::fmt;
use std::time::{Duration, Instant};

use gridsum_core::{Dataset, DatasetSource, GridSumError, PairMatch, Result, SolveResult, Target};
use gridsum_solver::{BruteForceSolver, HashTableSolver, TwoSumSolver};
use tracing::{info, warn};

use crate::analysis::Analysis;
use crate::config::BenchmarkConfig;
use crate::runner::Benchmark;

/// Largest speedup reported as a number; anything above renders as capped.
pub const SPEEDUP_CAP: f64 = 1_000_000.0;

/// Ratio of brute-force mean time to hash-table mean time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speedup {
    /// Finite ratio no larger than [`SPEEDUP_CAP`].
    Ratio(f64),
    /// Hash-table time was zero or the ratio exceeded [`SPEEDUP_CAP`].
    Capped,
}

impl Speedup {
    /// Computes the speedup of `candidate` over `baseline`.
    ///
    /// # Example
    ///
    /// ```
    /// use gridsum_benchmark::Speedup;
    /// use std::time::Duration;
    ///
    /// let speedup = Speedup::between(Duration::from_secs(30), Duration::from_secs(2));
    /// assert_eq!(speedup, Speedup::Ratio(15.0));
    /// assert_eq!(speedup.to_string(), "15.00x");
    ///
    /// let capped = Speedup::between(Duration::from_secs(30), Duration::ZERO);
    /// assert_eq!(capped.to_string(), ">1000000.00x");
    /// ```
    pub fn between(baseline: Duration, candidate: Duration) -> Self {
        if candidate.is_zero() {
            return Speedup::Capped;
        }
        let ratio = baseline.as_secs_f64() / candidate.as_secs_f64();
        if !ratio.is_finite() || ratio > SPEEDUP_CAP {
            Speedup::Capped
        } else {
            Speedup::Ratio(ratio)
        }
    }

    /// Numeric value, with capped speedups reported as [`SPEEDUP_CAP`].
    pub fn value(&self) -> f64 {
        match self {
            Speedup::Ratio(ratio) => *ratio,
            Speedup::Capped => SPEEDUP_CAP,
        }
    }

    pub fn is_capped(&self) -> bool {
        matches!(self, Speedup::Capped)
    }
}

impl fmt::Display for Speedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speedup::Ratio(ratio) => write!(f, "{ratio:.2}x"),
            Speedup::Capped => write!(f, ">{SPEEDUP_CAP:.2}x"),
        }
    }
}

/// Timing of one solver at one dataset size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timing {
    /// All runs completed.
    Measured {
        /// Mean wall-clock time over the measured runs.
        mean: Duration,
        /// Outcome of the final run.
        outcome: SolveResult,
    },
    /// A run exceeded the configured limit.
    TimedOut {
        limit: Duration,
    },
}

impl Timing {
    /// Mean time, if measured.
    pub fn mean(&self) -> Option<Duration> {
        match self {
            Timing::Measured { mean, .. } => Some(*mean),
            Timing::TimedOut { .. } => None,
        }
    }

    /// Solver outcome, if measured.
    pub fn outcome(&self) -> Option<SolveResult> {
        match self {
            Timing::Measured { outcome, .. } => Some(*outcome),
            Timing::TimedOut { .. } => None,
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, Timing::Measured { .. })
    }
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Requested dataset size.
    pub size: usize,
    /// Number of readings actually loaded.
    pub dataset_len: usize,
    pub brute_force: Timing,
    pub hash_table: Timing,
    /// Absent when either solver timed out.
    pub speedup: Option<Speedup>,
    /// Absent when neither solver was measured.
    pub found: Option<bool>,
}

impl ComparisonRow {
    /// Assembles a row, deriving speedup and found flag from the timings.
    pub fn new(size: usize, dataset_len: usize, brute_force: Timing, hash_table: Timing) -> Self {
        let speedup = match (brute_force.mean(), hash_table.mean()) {
            (Some(baseline), Some(candidate)) => Some(Speedup::between(baseline, candidate)),
            _ => None,
        };
        let found = brute_force
            .outcome()
            .or_else(|| hash_table.outcome())
            .map(|outcome| outcome.is_found());

        Self {
            size,
            dataset_len,
            brute_force,
            hash_table,
            speedup,
            found,
        }
    }

    /// Pair returned by the brute-force solver.
    pub fn brute_force_pair(&self) -> Option<PairMatch> {
        self.brute_force.outcome().and_then(|o| o.pair().copied())
    }

    /// Pair returned by the hash-table solver.
    pub fn hash_table_pair(&self) -> Option<PairMatch> {
        self.hash_table.outcome().and_then(|o| o.pair().copied())
    }

    /// Both solvers found a pair, but not the same one.
    pub fn pairs_differ(&self) -> bool {
        match (self.brute_force_pair(), self.hash_table_pair()) {
            (Some(bf), Some(ht)) => bf.indices() != ht.indices(),
            _ => false,
        }
    }

    /// Both solvers were measured and disagree on whether a pair exists.
    pub fn status_mismatch(&self) -> bool {
        match (self.brute_force.outcome(), self.hash_table.outcome()) {
            (Some(bf), Some(ht)) => bf.is_found() != ht.is_found(),
            _ => false,
        }
    }

    pub fn is_fully_measured(&self) -> bool {
        self.brute_force.is_measured() && self.hash_table.is_measured()
    }
}

/// A dataset size that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSize {
    pub size: usize,
    /// Error category, as reported by [`GridSumError::kind`].
    pub kind: &'static str,
    pub reason: String,
}

/// Result of a full comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// Report title, taken from the benchmark configuration.
    pub name: String,
    pub target: Target,
    /// Processed sizes in ascending order.
    pub rows: Vec<ComparisonRow>,
    pub skipped: Vec<SkippedSize>,
}

impl ComparisonReport {
    pub fn new(name: impl Into<String>, target: Target) -> Self {
        Self {
            name: name.into(),
            target,
            rows: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Number of sizes that were loaded and benchmarked, timed out or not.
    pub fn processed_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows where both solvers completed.
    pub fn measured_rows(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows.iter().filter(|row| row.is_fully_measured())
    }

    /// Derives the narrative facts from the rows.
    pub fn analysis(&self) -> Analysis {
        Analysis::from_report(self)
    }
}

/// Runs both solvers over every requested dataset size.
///
/// Generic over the dataset source, so directory-backed and synthetic runs
/// share one code path.
///
/// # Example
///
/// ```
/// use gridsum_benchmark::{BenchmarkConfig, Comparison};
/// use gridsum_core::SyntheticSource;
///
/// let comparison = Comparison::new(
///     BenchmarkConfig::new("demo").with_run_count(2),
///     SyntheticSource::new(7),
/// );
/// let report = comparison.run(&[100, 10, 100], 0).unwrap();
///
/// let sizes: Vec<usize> = report.rows.iter().map(|row| row.size).collect();
/// assert_eq!(sizes, vec![10, 100]);
/// assert!(report.skipped.is_empty());
/// ```
#[derive(Debug)]
pub struct Comparison<Src: DatasetSource> {
    config: BenchmarkConfig,
    source: Src,
}

impl<Src: DatasetSource> Comparison<Src> {
    pub fn new(config: BenchmarkConfig, source: Src) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub fn source(&self) -> &Src {
        &self.source
    }

    /// Benchmarks both solvers for each size in ascending order.
    ///
    /// Load failures are recorded as skipped sizes and timeouts as
    /// unmeasured timings; neither aborts the run.
    ///
    /// # Errors
    ///
    /// Returns [`GridSumError::InvalidConfiguration`] before any
    /// benchmarking when the run count is 0, `sizes` is empty, or any size
    /// is 0.
    pub fn run(&self, sizes: &[usize], target: Target) -> Result<ComparisonReport> {
        self.config.validate()?;
        if sizes.is_empty() {
            return Err(GridSumError::InvalidConfiguration(
                "no dataset sizes to compare".to_string(),
            ));
        }
        if sizes.contains(&0) {
            return Err(GridSumError::InvalidConfiguration(
                "dataset sizes must be at least 1".to_string(),
            ));
        }

        let mut ordered = sizes.to_vec();
        ordered.sort_unstable();
        ordered.dedup();

        let start = Instant::now();
        info!(
            event = "comparison_start",
            sizes = ordered.len() as u64,
            target_sum = target,
            runs = self.config.run_count() as u64,
        );

        let mut report = ComparisonReport::new(self.config.name(), target);
        for size in ordered {
            match self.compare_size(size, target) {
                Ok(row) => report.rows.push(row),
                Err(err) if err.is_recoverable() => {
                    warn!(event = "size_skipped", size = size as u64, reason = %err);
                    report.skipped.push(SkippedSize {
                        size,
                        kind: err.kind(),
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            event = "comparison_end",
            processed = report.processed_count() as u64,
            skipped = report.skipped.len() as u64,
            duration_ms = start.elapsed().as_millis() as u64,
        );

        Ok(report)
    }

    fn compare_size(&self, size: usize, target: Target) -> Result<ComparisonRow> {
        info!(
            event = "size_start",
            size = size as u64,
            source = %self.source.describe(size),
        );

        let dataset = self.source.load(size)?;
        if dataset.len() != size {
            warn!(
                event = "size_mismatch",
                size = size as u64,
                readings = dataset.len() as u64,
            );
        }

        let brute_force = self.measure(BruteForceSolver, &dataset, target)?;
        let hash_table = self.measure(HashTableSolver, &dataset, target)?;
        let row = ComparisonRow::new(size, dataset.len(), brute_force, hash_table);

        if row.status_mismatch() {
            warn!(
                event = "status_mismatch",
                size = size as u64,
                brute_force = %row.brute_force.outcome().unwrap_or_default(),
                hash_table = %row.hash_table.outcome().unwrap_or_default(),
            );
        }

        info!(
            event = "size_end",
            size = size as u64,
            brute_force_us = row.brute_force.mean().map(|d| d.as_micros() as u64),
            hash_table_us = row.hash_table.mean().map(|d| d.as_micros() as u64),
            speedup = row.speedup.map(|s| s.value()),
            speedup_capped = row.speedup.is_some_and(|s| s.is_capped()),
            found = row.found,
        );

        Ok(row)
    }

    fn measure<S: TwoSumSolver>(
        &self,
        solver: S,
        dataset: &Dataset,
        target: Target,
    ) -> Result<Timing> {
        match Benchmark::new(self.config.clone(), solver).run(dataset, target) {
            Ok(result) => Ok(Timing::Measured {
                mean: result.avg_solve_time(),
                outcome: result.final_outcome(),
            }),
            Err(GridSumError::BenchmarkTimeout { limit, .. }) => Ok(Timing::TimedOut { limit }),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests;

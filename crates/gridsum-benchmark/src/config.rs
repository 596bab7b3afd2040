//! Benchmark configuration.

use std::time::Duration;

use gridsum_config::RunConfig;
use gridsum_core::{GridSumError, Result};

/// Configuration for a benchmark run.
///
/// Controls warmup iterations, measurement runs, and the optional wall-clock
/// ceiling per solver invocation.
///
/// # Example
///
/// ```
/// use gridsum_benchmark::BenchmarkConfig;
/// use std::time::Duration;
///
/// let config = BenchmarkConfig::new("Grid Balancing")
///     .with_warmup_count(1)
///     .with_run_count(10)
///     .with_time_limit(Duration::from_secs(60));
///
/// assert_eq!(config.name(), "Grid Balancing");
/// assert_eq!(config.warmup_count(), 1);
/// assert_eq!(config.run_count(), 10);
/// assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    warmup_count: usize,
    run_count: usize,
    time_limit: Option<Duration>,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - warmup_count: 0
    /// - run_count: 5
    /// - time_limit: none
    ///
    /// # Example
    ///
    /// ```
    /// use gridsum_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test Benchmark");
    /// assert_eq!(config.warmup_count(), 0);
    /// assert_eq!(config.run_count(), 5);
    /// assert_eq!(config.time_limit(), None);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warmup_count: 0,
            run_count: 5,
            time_limit: None,
        }
    }

    /// Builds a configuration from the file/CLI run settings.
    ///
    /// # Example
    ///
    /// ```
    /// use gridsum_benchmark::BenchmarkConfig;
    /// use gridsum_config::RunConfig;
    /// use std::time::Duration;
    ///
    /// let run = RunConfig::new().with_run_count(3).with_time_limit_millis(200);
    /// let config = BenchmarkConfig::from_run_config(&run);
    /// assert_eq!(config.run_count(), 3);
    /// assert_eq!(config.time_limit(), Some(Duration::from_millis(200)));
    /// ```
    pub fn from_run_config(run: &RunConfig) -> Self {
        Self {
            name: Self::default().name,
            warmup_count: run.benchmark.warmup_count,
            run_count: run.benchmark.run_count,
            time_limit: run.time_limit(),
        }
    }

    /// Sets the number of warmup iterations (not measured).
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the number of measurement runs.
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.run_count = count;
        self
    }

    /// Sets the wall-clock ceiling per solver invocation.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Returns the benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of warmup iterations.
    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    /// Returns the number of measurement runs.
    pub fn run_count(&self) -> usize {
        self.run_count
    }

    /// Returns the per-invocation time limit, if set.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Rejects a zero run count.
    ///
    /// # Errors
    ///
    /// Returns [`GridSumError::InvalidConfiguration`] if `run_count` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.run_count == 0 {
            return Err(GridSumError::InvalidConfiguration(
                "run count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Energy Two-Sum Performance Analysis")
    }
}

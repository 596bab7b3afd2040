//! Configuration system for gridsum.
//!
//! Load comparison settings from TOML or YAML files to control the target,
//! dataset sizes, data source and measurement loop without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use gridsum_config::{RunConfig, SourceConfig};
//! use std::time::Duration;
//!
//! let config = RunConfig::from_toml_str(r#"
//!     target = -12
//!     sizes = [10, 100, 1000]
//!
//!     [source]
//!     type = "directory"
//!     path = "GreenIT_data"
//!
//!     [benchmark]
//!     run_count = 3
//!     seconds_spent_limit = 30
//! "#).unwrap();
//!
//! assert_eq!(config.target, -12);
//! assert_eq!(config.benchmark.time_limit(), Some(Duration::from_secs(30)));
//! assert!(matches!(config.source, SourceConfig::Directory(_)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use gridsum_config::RunConfig;
//!
//! let config = RunConfig::load("gridsum.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dataset sizes benchmarked when none are configured.
pub const DEFAULT_SIZES: [usize; 5] = [10, 100, 1_000, 10_000, 100_000];

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main comparison run configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RunConfig {
    /// Sum the solvers search for.
    #[serde(default)]
    pub target: i64,

    /// Dataset sizes to compare, in any order.
    #[serde(default = "default_sizes")]
    pub sizes: Vec<usize>,

    /// Where datasets come from.
    #[serde(default)]
    pub source: SourceConfig,

    /// Measurement loop configuration.
    #[serde(default)]
    pub benchmark: BenchmarkSettings,
}

fn default_sizes() -> Vec<usize> {
    DEFAULT_SIZES.to_vec()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target: 0,
            sizes: default_sizes(),
            source: SourceConfig::default(),
            benchmark: BenchmarkSettings::default(),
        }
    }
}

impl RunConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the target sum.
    pub fn with_target(mut self, target: i64) -> Self {
        self.target = target;
        self
    }

    /// Sets the dataset sizes.
    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    /// Sets the data source.
    pub fn with_source(mut self, source: SourceConfig) -> Self {
        self.source = source;
        self
    }

    /// Sets the number of measured runs per solver and size.
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.benchmark.run_count = count;
        self
    }

    /// Sets the number of unmeasured warmup runs.
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.benchmark.warmup_count = count;
        self
    }

    /// Sets the per-invocation time limit in milliseconds.
    pub fn with_time_limit_millis(mut self, millis: u64) -> Self {
        self.benchmark.millis_spent_limit = Some(millis);
        self.benchmark.seconds_spent_limit = None;
        self
    }

    /// Returns the per-invocation time limit, if configured.
    ///
    /// Convenience method that delegates to `benchmark.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.benchmark.time_limit()
    }

    /// Checks settings that would make a comparison meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero run count, a zero dataset
    /// size, no sizes without directory discovery, or an empty synthetic range.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridsum_config::RunConfig;
    ///
    /// assert!(RunConfig::new().validate().is_ok());
    /// assert!(RunConfig::new().with_run_count(0).validate().is_err());
    /// assert!(RunConfig::new().with_sizes(vec![10, 0]).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.benchmark.run_count == 0 {
            return Err(ConfigError::Invalid(
                "run_count must be at least 1".to_string(),
            ));
        }
        if self.sizes.iter().any(|&size| size == 0) {
            return Err(ConfigError::Invalid(
                "dataset sizes must be at least 1".to_string(),
            ));
        }
        match &self.source {
            SourceConfig::Directory(dir) if self.sizes.is_empty() && !dir.discover => {
                Err(ConfigError::Invalid(
                    "no dataset sizes configured and discovery is disabled".to_string(),
                ))
            }
            SourceConfig::Synthetic(_) if self.sizes.is_empty() => Err(ConfigError::Invalid(
                "no dataset sizes configured".to_string(),
            )),
            SourceConfig::Synthetic(synthetic) => match (synthetic.min_value, synthetic.max_value) {
                (Some(min), Some(max)) if min > max => Err(ConfigError::Invalid(format!(
                    "synthetic range is empty: min_value {} > max_value {}",
                    min, max
                ))),
                (Some(_), None) | (None, Some(_)) => Err(ConfigError::Invalid(
                    "synthetic range needs both min_value and max_value".to_string(),
                )),
                _ => Ok(()),
            },
            _ => Ok(()),
        }
    }
}

/// Dataset source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceConfig {
    /// `data_list_<N>.csv` files in a directory.
    Directory(DirectorySourceConfig),

    /// Seeded synthetic readings.
    Synthetic(SyntheticSourceConfig),
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Synthetic(SyntheticSourceConfig::default())
    }
}

impl SourceConfig {
    /// Creates a directory source without discovery.
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        SourceConfig::Directory(DirectorySourceConfig {
            path: path.into(),
            discover: false,
        })
    }
}

/// Directory source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DirectorySourceConfig {
    /// Directory holding the dataset files.
    pub path: PathBuf,

    /// Benchmark every dataset file found instead of the configured sizes.
    #[serde(default)]
    pub discover: bool,
}

/// Synthetic source configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SyntheticSourceConfig {
    /// Generator seed.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Lowest generated reading. Unset with `max_value` for a range that
    /// grows with the dataset size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,

    /// Highest generated reading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
}

impl SyntheticSourceConfig {
    /// Returns the fixed `(min_value, max_value)` range, if both are set.
    pub fn range(&self) -> Option<(i64, i64)> {
        self.min_value.zip(self.max_value)
    }
}

fn default_seed() -> u64 {
    42
}

impl Default for SyntheticSourceConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            min_value: None,
            max_value: None,
        }
    }
}

/// Measurement loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BenchmarkSettings {
    /// Measured runs per solver and size.
    #[serde(default = "default_run_count")]
    pub run_count: usize,

    /// Unmeasured runs before measurement.
    #[serde(default)]
    pub warmup_count: usize,

    /// Maximum seconds per solver invocation.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds per solver invocation.
    pub millis_spent_limit: Option<u64>,
}

fn default_run_count() -> usize {
    5
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            run_count: default_run_count(),
            warmup_count: 0,
            seconds_spent_limit: None,
            millis_spent_limit: None,
        }
    }
}

impl BenchmarkSettings {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis = self
            .seconds_spent_limit
            .unwrap_or(0)
            .saturating_mul(1000)
            .saturating_add(self.millis_spent_limit.unwrap_or(0));
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }
}

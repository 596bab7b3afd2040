//! Error types for gridsum

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Main error type for gridsum operations
#[derive(Debug, Error)]
pub enum GridSumError {
    /// The data source is missing or unreadable
    #[error("Data source error: {}: {source}", .path.display())]
    DataSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record could not be parsed as an integer
    #[error("Data format error: {}:{line}: record {record:?} is not a valid integer", .path.display())]
    DataFormat {
        path: PathBuf,
        line: usize,
        record: String,
    },

    /// Repeat count, dataset size or source settings are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A solver invocation exceeded its wall-clock ceiling
    #[error("Benchmark timeout: {solver} exceeded {limit:?} on {size} values")]
    BenchmarkTimeout {
        solver: String,
        limit: Duration,
        size: usize,
    },
}

impl GridSumError {
    /// Returns true if the error only affects a single dataset size.
    ///
    /// Configuration errors abort the whole comparison; everything else
    /// degrades to a skipped or unmeasured row.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GridSumError::InvalidConfiguration(_))
    }

    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            GridSumError::DataSource { .. } => "data_source",
            GridSumError::DataFormat { .. } => "data_format",
            GridSumError::InvalidConfiguration(_) => "invalid_configuration",
            GridSumError::BenchmarkTimeout { .. } => "benchmark_timeout",
        }
    }
}

/// Result type alias for gridsum operations
pub type Result<T> = std::result::Result<T, GridSumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path_and_line() {
        let err = GridSumError::DataFormat {
            path: PathBuf::from("data_list_10.csv"),
            line: 3,
            record: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Data format error: data_list_10.csv:3: record \"abc\" is not a valid integer"
        );
    }

    #[test]
    fn test_recoverability() {
        let missing = GridSumError::DataSource {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(missing.is_recoverable());
        assert_eq!(missing.kind(), "data_source");

        let config = GridSumError::InvalidConfiguration("run count must be at least 1".into());
        assert!(!config.is_recoverable());
        assert_eq!(config.kind(), "invalid_configuration");
    }
}

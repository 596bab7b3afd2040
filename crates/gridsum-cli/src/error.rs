//! CLI error type and exit codes.

use std::io;
use std::process::ExitCode;

use gridsum_config::ConfigError;
use gridsum_core::GridSumError;
use thiserror::Error;

/// Errors that end a CLI invocation.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    GridSum(#[from] GridSumError),

    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Exit status for this error.
    ///
    /// Missing or unreadable data exits with 2; bad configuration and
    /// everything else with 1.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::GridSum(err) if err.is_recoverable() => ExitCode::from(2),
            _ => ExitCode::from(1),
        }
    }
}

/// How a successful command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// At least one dataset size was processed, or the command had no data to process.
    Success,
    /// Every requested dataset size failed to load.
    NothingProcessed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::NothingProcessed => ExitCode::from(2),
        }
    }
}

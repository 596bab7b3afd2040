//! Benchmarking and comparison reports for gridsum solvers.
//!
//! This crate times the two-sum solvers against datasets of increasing size
//! and turns the measurements into tables and a short written analysis.
//!
//! # Overview
//!
//! - [`Benchmark`] runs one solver over one dataset with optional warmup
//!   and a per-invocation time limit.
//! - [`Comparison`] runs both solvers for every requested size, pulling
//!   datasets from any [`DatasetSource`](gridsum_core::DatasetSource).
//! - [`Analysis`] derives growth, memory and tie-breaking facts.
//! - [`ReportFormat`] renders the result as a console table, Markdown or CSV.
//!
//! # Zero-Erasure Design
//!
//! The runner is generic over [`TwoSumSolver`](gridsum_solver::TwoSumSolver)
//! and the comparison over its dataset source; neither stores trait objects.
//!
//! # Example
//!
//! ```
//! use gridsum_benchmark::{BenchmarkConfig, Comparison, ReportFormat};
//! use gridsum_core::SyntheticSource;
//!
//! let config = BenchmarkConfig::new("Grid Balancing")
//!     .with_warmup_count(1)
//!     .with_run_count(3);
//!
//! let report = Comparison::new(config, SyntheticSource::default())
//!     .run(&[10, 100], 0)
//!     .unwrap();
//!
//! assert_eq!(report.processed_count(), 2);
//! let table = ReportFormat::Table.render(&report);
//! assert!(table.contains("Result Found"));
//! ```

mod analysis;
mod comparison;
mod config;
mod report;
mod result;
mod runner;

pub use analysis::{
    hash_table_bytes, pair_count, Analysis, Growth, SizeSnapshot, SolverTrend, HASH_ENTRY_BYTES,
    REAL_TIME_BUDGET,
};
pub use comparison::{
    Comparison, ComparisonReport, ComparisonRow, SkippedSize, Speedup, Timing, SPEEDUP_CAP,
};
pub use config::BenchmarkConfig;
pub use report::{ConsoleTable, CsvExporter, MarkdownReport, ReportFormat};
pub use result::{BenchmarkResult, BenchmarkRun};
pub use runner::Benchmark;

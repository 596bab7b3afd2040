//! gridsum core - Core types for the two-sum energy balancing benchmark
//!
//! This crate provides the fundamental abstractions shared by every other
//! gridsum crate:
//! - [`Dataset`] of energy surplus/deficit readings and the [`Target`] sum
//! - [`SolveResult`] describing the outcome of a two-sum search
//! - [`DatasetSource`] implementations resolving a dataset size to data
//! - [`GridSumError`], the error taxonomy of the benchmark

pub mod dataset;
pub mod error;
pub mod result;
pub mod source;

pub use dataset::{Dataset, Target};
pub use error::{GridSumError, Result};
pub use result::{sums_to, PairMatch, SolveResult};
pub use source::{load_csv, write_csv, CsvDirectory, DatasetSource, SyntheticSource};

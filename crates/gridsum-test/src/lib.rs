//! Shared test fixtures for gridsum crates.
//!
//! This crate provides datasets and on-disk data directories for testing.
//! It depends only on `gridsum-core` so solver and benchmark crates can both
//! use it as a dev-dependency.
//!
//! - [`datasets`] - Fixed regression inputs with known outcomes
//! - [`data_dir`] - Temporary `data_list_<N>.csv` directories
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! gridsum-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use gridsum_test::datasets::{classic, surplus_regression};
//! use gridsum_test::data_dir::DataDir;
//! ```

pub mod data_dir;
pub mod datasets;

pub use data_dir::DataDir;
pub use datasets::Fixture;

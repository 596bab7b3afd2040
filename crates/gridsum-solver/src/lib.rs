//! gridsum solvers
//!
//! This crate provides the two-sum search algorithms compared by the benchmark:
//! - [`BruteForceSolver`]: exhaustive O(n²) pair scan, O(1) extra space
//! - [`HashTableSolver`]: single-pass complement lookup, O(n) time and space
//!
//! Both implement [`TwoSumSolver`]. Long searches poll a [`Termination`]
//! cooperatively so a benchmark can impose a wall-clock ceiling.
//!
//! # Example
//!
//! ```
//! use gridsum_core::Dataset;
//! use gridsum_solver::{BruteForceSolver, HashTableSolver, TwoSumSolver};
//!
//! let dataset = Dataset::new(vec![2, 7, 11, 15]);
//!
//! let brute = BruteForceSolver.solve(&dataset, 9);
//! let hashed = HashTableSolver.solve(&dataset, 9);
//!
//! assert_eq!(brute.indices(), Some((0, 1)));
//! assert_eq!(hashed.indices(), Some((0, 1)));
//! ```

mod brute_force;
mod hash_table;
pub mod scope;
mod solver;
pub mod termination;

#[cfg(test)]
mod tests;

pub use brute_force::BruteForceSolver;
pub use hash_table::HashTableSolver;
pub use scope::{Interrupted, SolveScope};
pub use solver::{Complexity, TwoSumSolver};
pub use termination::{CheckCountTermination, Termination, TimeTermination, Unbounded};

//! Deterministic synthetic energy readings.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::DatasetSource;
use crate::dataset::Dataset;
use crate::error::{GridSumError, Result};

/// Generates surplus/deficit readings from a seeded RNG.
///
/// The dataset for size `n` is drawn uniformly with a ChaCha8 generator
/// seeded by `seed + n`, so the same seed always reproduces the same data.
///
/// Without an explicit range, readings for size `n` span
/// `±SPREAD * n²`. A pair summing to a fixed target is then unlikely at
/// every size, so both solvers usually scan the whole dataset.
///
/// # Example
///
/// ```
/// use gridsum_core::{DatasetSource, SyntheticSource};
///
/// let source = SyntheticSource::new(7).with_range(-10, 10);
/// let a = source.load(100).unwrap();
/// let b = source.load(100).unwrap();
///
/// assert_eq!(a.len(), 100);
/// assert_eq!(a, b);
/// assert!(a.values().iter().all(|v| (-10..=10).contains(v)));
///
/// assert_eq!(SyntheticSource::new(7).range_for(10), (-10_000, 10_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticSource {
    seed: u64,
    range: Option<(i64, i64)>,
}

impl SyntheticSource {
    /// Default seed.
    pub const DEFAULT_SEED: u64 = 42;
    /// Scale of the size-dependent default range.
    pub const SPREAD: i64 = 100;

    /// Creates a generator whose range grows with the dataset size.
    pub fn new(seed: u64) -> Self {
        Self { seed, range: None }
    }

    /// Fixes the inclusive range of generated readings.
    pub fn with_range(mut self, min_value: i64, max_value: i64) -> Self {
        self.range = Some((min_value, max_value));
        self
    }

    /// Returns the seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the fixed range, if one was set.
    pub fn range(&self) -> Option<(i64, i64)> {
        self.range
    }

    /// Returns the inclusive range used for `size` readings.
    pub fn range_for(&self, size: usize) -> (i64, i64) {
        match self.range {
            Some(range) => range,
            None => {
                let n = i64::try_from(size.max(1)).unwrap_or(i64::MAX);
                let bound = n.saturating_mul(n).saturating_mul(Self::SPREAD);
                (-bound, bound)
            }
        }
    }

    /// Generates `size` readings.
    ///
    /// # Errors
    ///
    /// Returns [`GridSumError::InvalidConfiguration`] if the range is empty.
    pub fn generate(&self, size: usize) -> Result<Dataset> {
        let (min_value, max_value) = self.range_for(size);
        if min_value > max_value {
            return Err(GridSumError::InvalidConfiguration(format!(
                "synthetic range is empty: {} > {}",
                min_value, max_value
            )));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed.wrapping_add(size as u64));
        Ok((0..size)
            .map(|_| rng.random_range(min_value..=max_value))
            .collect())
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl DatasetSource for SyntheticSource {
    fn load(&self, size: usize) -> Result<Dataset> {
        self.generate(size)
    }

    fn describe(&self, size: usize) -> String {
        let (min_value, max_value) = self.range_for(size);
        format!(
            "synthetic(seed={}, n={}, range={}..={})",
            self.seed, size, min_value, max_value
        )
    }
}

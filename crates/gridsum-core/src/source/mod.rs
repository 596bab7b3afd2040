//! Dataset sources.
//!
//! A comparison run names datasets by size. A [`DatasetSource`] resolves each
//! size to a freshly loaded [`Dataset`]; nothing is cached across sizes.

mod delimited;
mod synthetic;

use crate::dataset::Dataset;
use crate::error::Result;

pub use delimited::{load_csv, read_records, write_csv, CsvDirectory, VALUE_COLUMN};
pub use synthetic::SyntheticSource;

/// Resolves a dataset size to a loaded dataset.
pub trait DatasetSource {
    /// Loads the dataset registered under `size`.
    fn load(&self, size: usize) -> Result<Dataset>;

    /// Human-readable origin of the dataset for `size`, used in logs.
    fn describe(&self, size: usize) -> String;
}

impl<T: DatasetSource + ?Sized> DatasetSource for &T {
    fn load(&self, size: usize) -> Result<Dataset> {
        (**self).load(size)
    }

    fn describe(&self, size: usize) -> String {
        (**self).describe(size)
    }
}

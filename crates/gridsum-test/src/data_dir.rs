//! Temporary data directories.

use std::fs;
use std::path::{Path, PathBuf};

use gridsum_core::{write_csv, CsvDirectory, Dataset};
use tempfile::TempDir;

/// A temporary directory of `data_list_<N>.csv` files.
///
/// The directory is removed when the value is dropped.
///
/// # Example
///
/// ```
/// use gridsum_core::{Dataset, DatasetSource};
/// use gridsum_test::DataDir;
///
/// let dir = DataDir::new()
///     .with_dataset(&Dataset::new(vec![1, 2, 3]))
///     .with_raw(10, "Value\n1\noops\n");
///
/// assert_eq!(dir.source().load(3).unwrap().len(), 3);
/// assert!(dir.source().load(10).is_err());
/// ```
pub struct DataDir {
    dir: TempDir,
}

impl DataDir {
    /// Creates an empty directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temporary data directory"),
        }
    }

    /// Writes `dataset` as `data_list_<len>.csv`.
    pub fn with_dataset(self, dataset: &Dataset) -> Self {
        let path = self.path_for(dataset.len());
        write_csv(dataset, path).expect("write dataset fixture");
        self
    }

    /// Writes `contents` verbatim as `data_list_<size>.csv`.
    pub fn with_raw(self, size: usize, contents: &str) -> Self {
        fs::write(self.path_for(size), contents).expect("write raw fixture");
        self
    }

    /// Returns the directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the file path used for `size`.
    pub fn path_for(&self, size: usize) -> PathBuf {
        self.source().path_for(size)
    }

    /// Returns a source reading from this directory.
    pub fn source(&self) -> CsvDirectory {
        CsvDirectory::new(self.dir.path())
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::new()
    }
}

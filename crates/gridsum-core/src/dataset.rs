//! Energy surplus datasets.

/// The desired sum of two readings.
pub type Target = i64;

/// An ordered, immutable sequence of energy surplus/deficit readings.
///
/// # Example
///
/// ```
/// use gridsum_core::Dataset;
///
/// let dataset = Dataset::new(vec![25, -48, 56]);
/// assert_eq!(dataset.len(), 3);
/// assert_eq!(dataset.get(1), Some(-48));
/// assert_eq!(dataset.values(), &[25, -48, 56]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<i64>,
}

impl Dataset {
    /// Creates a dataset from readings in source order.
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// Returns the readings in source order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Returns the reading at `index`, if any.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// Returns the number of readings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the dataset holds no readings.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if any reading occurs more than once.
    ///
    /// Solvers may legitimately disagree on the returned pair when this holds.
    pub fn has_duplicates(&self) -> bool {
        let mut sorted = self.values.clone();
        sorted.sort_unstable();
        sorted.windows(2).any(|w| w[0] == w[1])
    }
}

impl From<Vec<i64>> for Dataset {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<i64> for Dataset {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AsRef<[i64]> for Dataset {
    fn as_ref(&self) -> &[i64] {
        &self.values
    }
}

//! Delimited text datasets (`data_list_<N>.csv`).

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use super::DatasetSource;
use crate::dataset::Dataset;
use crate::error::{GridSumError, Result};

/// Header label of the readings column.
pub const VALUE_COLUMN: &str = "Value";

const FILE_PREFIX: &str = "data_list_";
const FILE_SUFFIX: &str = ".csv";
const BOM: char = '\u{feff}';

/// Loads a dataset from a CSV file.
///
/// # Errors
///
/// Returns [`GridSumError::DataSource`] if the file is missing or unreadable,
/// and [`GridSumError::DataFormat`] if a record is not an integer.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GridSumError::DataSource {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file, path)
}

/// Reads one integer per record from `reader`.
///
/// The first non-blank record is treated as a header when it is not an
/// integer and names a `Value` column; readings are then taken from that
/// column. Without a header every record must be a single integer. Fields
/// may be quoted.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use gridsum_core::source::read_records;
///
/// let dataset = read_records("Value\n25\n-48\n\n56\n".as_bytes(), Path::new("inline")).unwrap();
/// assert_eq!(dataset.values(), &[25, -48, 56]);
///
/// let dataset = read_records("Hour,Value\n0,12\n1,\"-3\"\n".as_bytes(), Path::new("inline")).unwrap();
/// assert_eq!(dataset.values(), &[12, -3]);
/// ```
pub fn read_records<R: Read>(reader: R, origin: &Path) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut values = Vec::new();
    let mut column: Option<usize> = None;
    let mut header_checked = false;
    let mut record = StringRecord::new();

    loop {
        let more = reader
            .read_record(&mut record)
            .map_err(|err| csv_error(origin, err))?;
        if !more {
            break;
        }
        if !header_checked {
            strip_bom(&mut record);
        }
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line() as usize);

        if !header_checked {
            header_checked = true;
            if let Some(position) = header_column(&record) {
                column = Some(position);
                continue;
            }
        }

        let field = match column {
            Some(position) => record.get(position),
            None if record.len() == 1 => record.get(0),
            None => None,
        };
        let value = field
            .and_then(|f| f.parse::<i64>().ok())
            .ok_or_else(|| GridSumError::DataFormat {
                path: origin.to_path_buf(),
                line,
                record: record.iter().collect::<Vec<_>>().join(","),
            })?;
        values.push(value);
    }

    Ok(Dataset::new(values))
}

// Position of the `Value` column if `record` is a header row.
fn header_column(record: &StringRecord) -> Option<usize> {
    if record.len() == 1 && record[0].parse::<i64>().is_ok() {
        return None;
    }
    record
        .iter()
        .position(|field| field.eq_ignore_ascii_case(VALUE_COLUMN))
}

fn strip_bom(record: &mut StringRecord) {
    if record.get(0).is_some_and(|first| first.starts_with(BOM)) {
        let stripped: StringRecord = record
            .iter()
            .enumerate()
            .map(|(i, field)| {
                if i == 0 {
                    field.trim_start_matches(BOM).trim()
                } else {
                    field
                }
            })
            .collect();
        let position = record.position().cloned();
        *record = stripped;
        record.set_position(position);
    }
}

fn csv_error(path: &Path, err: csv::Error) -> GridSumError {
    let source = match err.into_kind() {
        csv::ErrorKind::Io(source) => source,
        csv::ErrorKind::Utf8 { err, .. } => io::Error::new(io::ErrorKind::InvalidData, err),
        other => io::Error::new(io::ErrorKind::InvalidData, format!("{other:?}")),
    };
    GridSumError::DataSource {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes a dataset as a `Value`-headed CSV file.
pub fn write_csv(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|err| csv_error(path, err))?;

    writer
        .write_record([VALUE_COLUMN])
        .map_err(|err| csv_error(path, err))?;
    for value in dataset.values() {
        writer
            .write_record([value.to_string()])
            .map_err(|err| csv_error(path, err))?;
    }
    writer.flush().map_err(|source| GridSumError::DataSource {
        path: path.to_path_buf(),
        source,
    })
}

/// A directory of `data_list_<N>.csv` files, one per dataset size.
///
/// # Example
///
/// ```
/// use gridsum_core::CsvDirectory;
/// use std::path::Path;
///
/// let source = CsvDirectory::new("/data");
/// assert_eq!(source.path_for(100), Path::new("/data/data_list_100.csv"));
/// assert_eq!(CsvDirectory::size_from_file_name("data_list_10.csv"), Some(10));
/// assert_eq!(CsvDirectory::size_from_file_name("notes.csv"), None);
/// ```
#[derive(Debug, Clone)]
pub struct CsvDirectory {
    dir: PathBuf,
}

impl CsvDirectory {
    /// Creates a source rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file holding the dataset of `size` readings.
    pub fn path_for(&self, size: usize) -> PathBuf {
        self.dir.join(Self::file_name(size))
    }

    /// Returns the file name used for `size`.
    pub fn file_name(size: usize) -> String {
        format!("{}{}{}", FILE_PREFIX, size, FILE_SUFFIX)
    }

    /// Parses the dataset size out of a `data_list_<N>.csv` file name.
    pub fn size_from_file_name(name: &str) -> Option<usize> {
        name.strip_prefix(FILE_PREFIX)?
            .strip_suffix(FILE_SUFFIX)?
            .parse()
            .ok()
    }

    /// Lists the sizes of every dataset file in the directory, ascending.
    pub fn discover_sizes(&self) -> Result<Vec<usize>> {
        let io_error = |source| GridSumError::DataSource {
            path: self.dir.clone(),
            source,
        };

        let mut sizes = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            if let Some(size) = entry.file_name().to_str().and_then(Self::size_from_file_name) {
                sizes.push(size);
            }
        }
        sizes.sort_unstable();
        sizes.dedup();
        Ok(sizes)
    }
}

impl DatasetSource for CsvDirectory {
    fn load(&self, size: usize) -> Result<Dataset> {
        load_csv(self.path_for(size))
    }

    fn describe(&self, size: usize) -> String {
        self.path_for(size).display().to_string()
    }
}

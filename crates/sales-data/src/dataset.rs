//! Dataset loading.
//!
//! The dataset is read once and never mutated afterwards, so it can be shared
//! behind an `Arc` by any number of readers without locking.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::DatasetError;
use crate::record::{ColumnLayout, SalesRecord};

/// Immutable in-memory view of the sales table.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesDataset {
    columns: Vec<String>,
    records: Vec<SalesRecord>,
}

impl SalesDataset {
    /// Parses a dataset from any CSV byte stream with a header row.
    ///
    /// Rows shorter than the header are accepted; their trailing cells are
    /// treated as missing.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if:
    /// - A required column is absent from the header row
    /// - The stream is not valid CSV or not valid UTF-8
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| DatasetError::from_csv(&err))?
            .clone();
        let layout = ColumnLayout::from_headers(&headers)?;

        let records = csv_reader
            .records()
            .map(|row| {
                row.map(|values| layout.decode(&values))
                    .map_err(|err| DatasetError::from_csv(&err))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            columns: layout.keys().to_vec(),
            records,
        })
    }

    /// Loads a dataset from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::IoError`] if the file cannot be opened, or any
    /// error reported by [`SalesDataset::from_reader`].
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|e| DatasetError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_reader(file)
    }

    /// Header names in file order, including unmodelled columns.
    ///
    /// Repeated names carry a `.1`, `.2`, ... suffix.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of header columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Every row in file order.
    #[must_use]
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

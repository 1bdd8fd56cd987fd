//! Error types for the sales-data crate.
//!
//! Loading is the only fallible step: once a [`crate::SalesDataset`] exists
//! every query over it is infallible.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the sales dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset file could not be opened or read.
    #[error("failed to read dataset at '{path}': {message}")]
    IoError {
        /// Path to the dataset file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The header row lacks a column every sales row must carry.
    #[error("dataset is missing required column '{column}'")]
    MissingColumn {
        /// Name of the absent column.
        column: &'static str,
    },

    /// The CSV stream could not be decoded.
    #[error("malformed CSV at line {line}: {message}")]
    Malformed {
        /// One-based line number reported by the CSV reader, or 0 if unknown.
        line: u64,
        /// Description of the decoding failure.
        message: String,
    },
}

impl DatasetError {
    pub(crate) fn from_csv(err: &csv::Error) -> Self {
        Self::Malformed {
            line: err.position().map_or(0, csv::Position::line),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_formats_correctly() {
        let err = DatasetError::IoError {
            path: PathBuf::from("/data/vgsales.csv"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read dataset at '/data/vgsales.csv': file not found"
        );
    }

    #[test]
    fn missing_column_formats_correctly() {
        let err = DatasetError::MissingColumn {
            column: "Global_Sales",
        };
        assert_eq!(
            err.to_string(),
            "dataset is missing required column 'Global_Sales'"
        );
    }

    #[test]
    fn malformed_formats_correctly() {
        let err = DatasetError::Malformed {
            line: 3,
            message: "bad quote".to_owned(),
        };
        assert_eq!(err.to_string(), "malformed CSV at line 3: bad quote");
    }
}

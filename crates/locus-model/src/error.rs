//! Error types shared by the loading and transform crates.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating, loading, or reshaping tables.
#[derive(Debug, Error)]
pub enum DataError {
    // === File System Errors ===
    /// Requested data file does not exist.
    #[error("data file not found: {path}")]
    MissingFile { path: PathBuf },

    /// Failed to read a file that exists.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Selection Errors ===
    /// Caller supplied an invalid or contradictory selection.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A file exists but lacks a column its strict schema requires.
    #[error("required column '{column}' missing from {path}")]
    SchemaMismatch { column: String, path: PathBuf },

    /// No requested file could be loaded.
    #[error("selection produced no tables: no requested file could be loaded")]
    EmptyResult,

    // === DataFrame Errors ===
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Two long-format rows mapped to the same wide cell.
    #[error("duplicate value for key '{key}' in column '{column}'")]
    DuplicateKey { key: String, column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for DataError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for data loading and reshaping operations.
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DataError::MissingFile {
            path: PathBuf::from("/data/functional/cbp_county.csv"),
        };
        assert_eq!(
            err.to_string(),
            "data file not found: /data/functional/cbp_county.csv"
        );

        let err = DataError::SchemaMismatch {
            column: "PAYANN".to_string(),
            path: PathBuf::from("cbp_year_county_2010.csv"),
        };
        assert_eq!(
            err.to_string(),
            "required column 'PAYANN' missing from cbp_year_county_2010.csv"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let data_err: DataError = polars_err.into();
        assert!(matches!(data_err, DataError::DataFrame { .. }));
    }
}

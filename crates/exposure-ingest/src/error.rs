//! Error types for simulation table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a simulation table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Table file not found.
    #[error("simulation table not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected a record.
    #[error("failed to parse {path} near line {line}: {message}")]
    CsvParse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// The table has no non-blank rows.
    #[error("simulation table is empty: {path}")]
    EmptyTable { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

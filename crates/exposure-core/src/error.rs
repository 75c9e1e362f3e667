//! Error types for indexing and extraction.

use exposure_ingest::IngestError;
use exposure_model::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExposureError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Missing sentinel, malformed hours, or a table too short for a profile.
    #[error("malformed simulation table: {message}")]
    Format { message: String },

    /// A birth or sampling year the simulation cannot answer for.
    #[error("invalid year {year}: {reason}")]
    InvalidYear { year: i32, reason: String },

    /// An hour off the timestep grid or outside the table.
    #[error("hour {hour} is not on the simulation time grid")]
    KeyNotFound { hour: u64 },

    #[error("non-numeric concentration '{value}' at row {row}, column {column}")]
    Parse {
        row: usize,
        column: usize,
        value: String,
    },

    /// Internal invariant violation: the resolved sampling index does not
    /// address the profile.
    #[error(
        "sampling index {index} outside profile of length {len} \
         (birth year {birth_year}, sampling year {sampling_year})"
    )]
    IndexOutOfProfile {
        birth_year: i32,
        sampling_year: i32,
        index: i64,
        len: usize,
    },
}

impl ExposureError {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_year(year: i32, reason: impl Into<String>) -> Self {
        Self::InvalidYear {
            year,
            reason: reason.into(),
        }
    }

    /// True for errors caused by caller input rather than the table or config.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidYear { .. })
    }
}

pub type Result<T> = std::result::Result<T, ExposureError>;

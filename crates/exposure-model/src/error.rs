use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or loading a [`crate::SimulationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("age at model start {age} is outside {min}..={max}")]
    AgeAtModelStart { age: u32, min: u32, max: u32 },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} = {value} exceeds {max}")]
    TooLarge {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config: {source}")]
    Toml {
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

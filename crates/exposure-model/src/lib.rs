//! Core types shared by the cohort exposure crates.
//!
//! - [`SimulationConfig`]: the immutable run parameters (start year, cohort
//!   spacing, column count, hours per year).
//! - [`ConcentrationProfile`]: one cohort's lifetime series.
//! - [`CrossSectionalSample`]: one calendar year's (age, concentration) points.

pub mod config;
pub mod error;
pub mod series;

pub use config::{MAX_AGE_AT_MODEL_START, MIN_AGE_AT_MODEL_START, SimulationConfig};
pub use error::{ConfigError, Result};
pub use series::{CohortPoint, ConcentrationProfile, CrossSectionalSample};

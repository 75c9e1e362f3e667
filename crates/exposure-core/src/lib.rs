//! Cohort exposure indexing and extraction.
//!
//! A simulation table has one row per timestep and one column per cohort
//! slot. This crate maps birth years and calendar years onto that grid:
//!
//! - [`TimeIndex`]: simulation hour → table row, timestep, end year
//! - [`CohortIndex`]: birth year → table column (rotating assignment)
//! - [`ProfileExtractor`]: a cohort's lifetime series, memoized per birth year
//! - [`ProfileExtractor::concentration_at`]: one value at a sampling year
//! - [`Simulation::cross_section`]: every live cohort at one calendar year
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use exposure_core::Simulation;
//! use exposure_model::SimulationConfig;
//!
//! let config = SimulationConfig::default().with_age_at_model_start(5);
//! let simulation = Simulation::load(Path::new("CWOMAN.txt"), config)?;
//!
//! let mut extractor = simulation.extractor();
//! let at_sampling = extractor.concentration_at(1985, 2004)?;
//! let cbat = simulation.cross_section(2004)?;
//! ```

mod cache;
mod cohort_index;
mod cross_section;
mod error;
pub mod logging;
mod profile;
mod sampling;
mod simulation;
mod time_index;

// === Error Types ===
pub use error::{ExposureError, Result};

// === Indices ===
pub use cohort_index::{CohortIndex, rotating_column};
pub use time_index::TimeIndex;

// === Extraction ===
pub use cache::ProfileCache;
pub use cross_section::cross_section;
pub use profile::{LifetimeSpan, ProfileExtractor};
pub use sampling::sampling_index;
pub use simulation::Simulation;

//! Simulation table ingestion.
//!
//! Reads the delimited output of a cohort exposure run into a
//! [`SimulationTable`]: leading metadata rows, a `TIME` sentinel row, then one
//! row per simulation timestep.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use exposure_ingest::{TIME_SENTINEL, read_simulation_table};
//!
//! let table = read_simulation_table(Path::new("CWOMAN.txt"))?;
//! let first_data_row = table.find_sentinel(TIME_SENTINEL).map(|i| i + 1);
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Reading ===
pub use csv::{
    SimulationTable, TIME_SENTINEL, read_simulation_table, read_simulation_table_from_reader,
    read_simulation_table_with_delimiter,
};

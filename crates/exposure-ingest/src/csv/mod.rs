//! Delimited table reading.

mod reader;
mod table;

pub use reader::{
    read_simulation_table, read_simulation_table_from_reader, read_simulation_table_with_delimiter,
};
pub use table::{SimulationTable, TIME_SENTINEL};

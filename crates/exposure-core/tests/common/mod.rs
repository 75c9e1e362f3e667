//! Synthetic simulation tables whose cells encode their own position.
#![allow(dead_code)]

use exposure_ingest::SimulationTable;

/// Rows before the first data row: one metadata row and the sentinel.
pub const HEADER_ROWS: usize = 2;

/// Value stored at `(row, column)` by [`encoded_table`].
pub fn encoded_value(row: usize, column: usize) -> f64 {
    (row * 1000 + column) as f64
}

/// A table with `data_rows` rows spaced `timestep` hours apart and
/// `columns` cohort columns.
pub fn encoded_table(data_rows: usize, timestep: u64, columns: usize) -> SimulationTable {
    let mut rows = vec![
        vec!["synthetic run".to_string()],
        std::iter::once("TIME".to_string())
            .chain((1..=columns).map(|c| format!("C{c}")))
            .collect(),
    ];
    for k in 0..data_rows {
        let row = HEADER_ROWS + k;
        let mut fields = vec![(k as u64 * timestep).to_string()];
        fields.extend((1..=columns).map(|c| encoded_value(row, c).to_string()));
        rows.push(fields);
    }
    SimulationTable::new(rows)
}

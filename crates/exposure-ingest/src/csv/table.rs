//! In-memory simulation table.

/// First-column label of the row that precedes the time series.
pub const TIME_SENTINEL: &str = "time";

/// Rows of trimmed string fields, in file order.
///
/// Metadata rows, the sentinel row and data rows are kept together so row
/// positions match the source file (minus blank lines).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationTable {
    rows: Vec<Vec<String>>,
}

impl SimulationTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Cell text at `(row, column)`, if both exist.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first row whose first field equals `label`, ignoring case.
    pub fn find_sentinel(&self, label: &str) -> Option<usize> {
        self.rows.iter().position(|row| {
            row.first()
                .is_some_and(|field| field.trim().eq_ignore_ascii_case(label))
        })
    }
}

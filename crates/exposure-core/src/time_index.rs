//! Simulation hour to table row mapping.

use std::collections::BTreeMap;

use exposure_ingest::{SimulationTable, TIME_SENTINEL};

use crate::error::{ExposureError, Result};

/// Maps each simulation hour in the time series to its absolute table row.
#[derive(Debug, Clone)]
pub struct TimeIndex {
    rows: BTreeMap<u64, usize>,
    first_data_row: usize,
    timestep: u64,
    last_hour: u64,
}

impl TimeIndex {
    /// Index every data row after the `time` sentinel.
    ///
    /// Hours must be non-negative integers increasing by one constant step,
    /// and at least two data rows are needed to derive that step.
    pub fn build(table: &SimulationTable) -> Result<Self> {
        let sentinel = table.find_sentinel(TIME_SENTINEL).ok_or_else(|| {
            ExposureError::format(format!("no '{TIME_SENTINEL}' sentinel row found"))
        })?;
        let first_data_row = sentinel + 1;

        let mut rows = BTreeMap::new();
        let mut previous: Option<u64> = None;
        let mut timestep: Option<u64> = None;

        for (row_index, row) in table.rows().iter().enumerate().skip(first_data_row) {
            let hour = parse_hour(row, row_index)?;
            if let Some(prev) = previous {
                if hour <= prev {
                    return Err(ExposureError::format(format!(
                        "hours must increase: row {row_index} has hour {hour} after {prev}"
                    )));
                }
                let step = hour - prev;
                match timestep {
                    None => timestep = Some(step),
                    Some(expected) if expected != step => {
                        return Err(ExposureError::format(format!(
                            "irregular timestep at row {row_index}: expected {expected}, found {step}"
                        )));
                    }
                    Some(_) => {}
                }
            }
            rows.insert(hour, row_index);
            previous = Some(hour);
        }

        let (Some(timestep), Some(last_hour)) = (timestep, previous) else {
            return Err(ExposureError::format(
                "at least two data rows are needed to derive the timestep",
            ));
        };

        tracing::debug!(
            first_data_row,
            data_rows = rows.len(),
            timestep,
            last_hour,
            "built time index"
        );

        Ok(Self {
            rows,
            first_data_row,
            timestep,
            last_hour,
        })
    }

    /// Hours between consecutive data rows.
    pub fn timestep(&self) -> u64 {
        self.timestep
    }

    /// Absolute table row of the first data row.
    pub fn first_data_row(&self) -> usize {
        self.first_data_row
    }

    pub fn last_hour(&self) -> u64 {
        self.last_hour
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether `row` is one of the indexed data rows.
    pub fn is_data_row(&self, row: usize) -> bool {
        row >= self.first_data_row && row < self.first_data_row + self.rows.len()
    }

    /// Last calendar year fully covered by the time series.
    pub fn end_year(&self, start_year: i32, hours_per_year: u64) -> Result<i32> {
        let years = self.last_hour.checked_div(hours_per_year).unwrap_or(0);
        i32::try_from(years)
            .ok()
            .and_then(|years| start_year.checked_add(years))
            .ok_or_else(|| {
                ExposureError::format(format!(
                    "last hour {} is {years} years past {start_year}, beyond the calendar range",
                    self.last_hour
                ))
            })
    }

    /// Exact-match lookup of the row recorded at `hour`.
    pub fn row_for_hour(&self, hour: u64) -> Result<usize> {
        self.rows
            .get(&hour)
            .copied()
            .ok_or(ExposureError::KeyNotFound { hour })
    }
}

fn parse_hour(row: &[String], row_index: usize) -> Result<u64> {
    let field = row.first().map_or("", String::as_str);
    field.parse::<u64>().map_err(|_| {
        ExposureError::format(format!(
            "row {row_index}: hour '{field}' is not a non-negative integer"
        ))
    })
}

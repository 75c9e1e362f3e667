//! Cross-sectional body burden age trends (CBAT).

use exposure_model::{CohortPoint, CrossSectionalSample};

use crate::cohort_index::CohortIndex;
use crate::error::{ExposureError, Result};
use crate::profile::parse_concentration;
use crate::simulation::Simulation;

/// Every live cohort's concentration at `year`, sorted by age.
///
/// Values come from the last data row before the year's first hour.
pub fn cross_section(simulation: &Simulation, year: i32) -> Result<CrossSectionalSample> {
    if !simulation.contains_year(year) {
        return Err(ExposureError::invalid_year(
            year,
            format!(
                "year is outside the simulation ({}..={})",
                simulation.start_year(),
                simulation.end_year()
            ),
        ));
    }
    let hour = simulation
        .config()
        .hour_of_year(year)
        .ok_or_else(|| ExposureError::invalid_year(year, "year precedes the simulation"))?;

    let time = simulation.time_index();
    let boundary_row = time.row_for_hour(hour)?;
    let row_index = boundary_row
        .checked_sub(1)
        .filter(|row| time.is_data_row(*row))
        .ok_or_else(|| {
            ExposureError::invalid_year(year, "no recorded state precedes the first simulated year")
        })?;

    let table = simulation.table();
    let width = table.row(row_index).map_or(0, <[String]>::len);
    let cohorts = simulation.cohort_index();

    let mut points = Vec::new();
    for column in 1..width {
        let Some(birth_year) = column_owner(cohorts, column, year) else {
            continue;
        };
        let concentration = parse_concentration(table, row_index, column)?;
        points.push(CohortPoint {
            age: (year - birth_year) as u32,
            birth_year,
            column,
            concentration,
        });
    }
    // Stable: equal ages keep column order.
    points.sort_by_key(|point| point.age);

    tracing::debug!(year, row = row_index, cohorts = points.len(), "extracted cross-section");
    Ok(CrossSectionalSample { year, points })
}

/// Resolves the live cohort in `column`, cross-checking the rotation
/// arithmetic against a reverse lookup of the birth-year map.
fn column_owner(cohorts: &CohortIndex, column: usize, year: i32) -> Option<i32> {
    let by_rotation = cohorts.owner_by_rotation(column, year);
    let by_lookup = cohorts.owner_by_lookup(column, year);
    if by_rotation != by_lookup {
        tracing::warn!(
            column,
            year,
            ?by_rotation,
            ?by_lookup,
            "column ownership mismatch, using rotation result"
        );
    }
    by_rotation
}

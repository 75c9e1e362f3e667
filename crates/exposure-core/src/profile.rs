//! Lifetime concentration profiles.

use exposure_ingest::SimulationTable;
use exposure_model::{ConcentrationProfile, SimulationConfig};

use crate::cache::ProfileCache;
use crate::error::{ExposureError, Result};
use crate::simulation::Simulation;

/// The stretch of a cohort's life recorded in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifetimeSpan {
    pub years_in_simulation: u32,
    /// Simulation hour of the first recorded value.
    pub start_hour: u64,
}

impl LifetimeSpan {
    /// Cases are checked in order:
    ///
    /// 1. born before start and still alive at the end: the whole simulation
    /// 2. still alive at the end: birth to end
    /// 3. born before start: the rest of `max_age` after the start
    /// 4. otherwise: `max_age` years
    pub fn new(config: &SimulationConfig, end_year: i32, birth_year: i32) -> Self {
        let start_year = i64::from(config.start_year);
        let end_year = i64::from(end_year);
        let birth = i64::from(birth_year);
        let max_age = i64::from(config.max_age);
        let born_before_start = start_year > birth;
        let outlives_simulation = birth + max_age > end_year;

        let years = if born_before_start && outlives_simulation {
            end_year - start_year
        } else if outlives_simulation {
            end_year - birth
        } else if born_before_start {
            max_age - (start_year - birth)
        } else {
            max_age
        };

        let start_hour = if born_before_start {
            0
        } else {
            config.hour_of_year(birth_year).unwrap_or(0)
        };

        Self {
            years_in_simulation: u32::try_from(years).unwrap_or(0),
            start_hour,
        }
    }

    /// Number of data rows the span covers.
    pub fn points(&self, hours_per_year: u64, timestep: u64) -> usize {
        (u64::from(self.years_in_simulation) * hours_per_year / timestep) as usize
    }
}

pub(crate) fn extract_profile(
    simulation: &Simulation,
    birth_year: i32,
) -> Result<ConcentrationProfile> {
    let column = simulation
        .cohort_index()
        .column_for_birth_year(birth_year)?;
    let span = simulation.lifetime_span(birth_year);
    let timestep = simulation.timestep();
    let points = span.points(simulation.config().hours_per_year, timestep);

    let time = simulation.time_index();
    let start_row = time.row_for_hour(span.start_hour)?;
    let end_row = start_row + points;
    if points > 0 && !time.is_data_row(end_row - 1) {
        return Err(ExposureError::format(format!(
            "profile for birth year {birth_year} needs rows {start_row}..{end_row} \
             but the time series has {} rows from row {}",
            time.len(),
            time.first_data_row()
        )));
    }

    let table = simulation.table();
    let values = (start_row..end_row)
        .map(|row| parse_concentration(table, row, column))
        .collect::<Result<Vec<f64>>>()?;

    Ok(ConcentrationProfile {
        birth_year,
        start_hour: span.start_hour,
        timestep,
        values,
    })
}

pub(crate) fn parse_concentration(
    table: &SimulationTable,
    row: usize,
    column: usize,
) -> Result<f64> {
    let cell = table
        .cell(row, column)
        .ok_or_else(|| ExposureError::format(format!("row {row} has no column {column}")))?;
    cell.parse::<f64>().map_err(|_| ExposureError::Parse {
        row,
        column,
        value: cell.to_string(),
    })
}

/// Extracts profiles from one [`Simulation`], memoizing them by birth year.
///
/// Not shared between threads; create one extractor per thread.
#[derive(Debug)]
pub struct ProfileExtractor<'a> {
    simulation: &'a Simulation,
    cache: ProfileCache,
}

impl<'a> ProfileExtractor<'a> {
    pub fn new(simulation: &'a Simulation) -> Self {
        Self {
            simulation,
            cache: ProfileCache::new(),
        }
    }

    pub fn simulation(&self) -> &'a Simulation {
        self.simulation
    }

    pub fn cache(&self) -> &ProfileCache {
        &self.cache
    }

    /// Lifetime profile of the cohort born in `birth_year`.
    pub fn profile_for(&mut self, birth_year: i32) -> Result<&ConcentrationProfile> {
        let simulation = self.simulation;
        self.cache
            .get_or_try_insert_with(birth_year, || extract_profile(simulation, birth_year))
    }

    /// Profiles for the cohorts born from `start_year - age_at_model_start`
    /// across one `max_age` span, oldest first.
    pub fn default_profiles(&mut self) -> Result<Vec<ConcentrationProfile>> {
        let config = *self.simulation.config();
        let first = config.reference_birth_year();
        let last = first.saturating_add(config.max_age_years());
        let step = config.age_spread as usize;

        (first..last)
            .step_by(step)
            .map(|birth_year| self.profile_for(birth_year).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig::default().with_age_at_model_start(5)
    }

    #[test]
    fn test_span_born_after_start_outliving_simulation() {
        let span = LifetimeSpan::new(&config(), 2030, 1985);
        assert_eq!(span.years_in_simulation, 45);
        assert_eq!(span.start_hour, 55 * 8760);
    }

    #[test]
    fn test_span_born_before_start() {
        let span = LifetimeSpan::new(&config(), 2030, 1925);
        assert_eq!(span.years_in_simulation, 75);
        assert_eq!(span.start_hour, 0);
    }

    #[test]
    fn test_span_born_before_start_outliving_simulation() {
        let span = LifetimeSpan::new(&config(), 1960, 1925);
        assert_eq!(span.years_in_simulation, 30);
        assert_eq!(span.start_hour, 0);
    }

    #[test]
    fn test_span_full_lifetime() {
        let span = LifetimeSpan::new(&config(), 2100, 1945);
        assert_eq!(span.years_in_simulation, 80);
        assert_eq!(span.start_hour, 15 * 8760);
    }

    #[test]
    fn test_span_never_negative() {
        let span = LifetimeSpan::new(&config(), 2030, 1840);
        assert_eq!(span.years_in_simulation, 0);
    }

    #[test]
    fn test_points_scale_with_timestep() {
        let span = LifetimeSpan::new(&config(), 2030, 1985);
        assert_eq!(span.points(8760, 8760), 45);
        assert_eq!(span.points(8760, 730), 45 * 12);
    }

    #[test]
    fn test_parse_concentration_errors() {
        let table = SimulationTable::new(vec![
            vec!["TIME".to_string(), "C1".to_string()],
            vec!["0".to_string(), "n/a".to_string()],
        ]);
        assert!(matches!(
            parse_concentration(&table, 1, 1),
            Err(ExposureError::Parse { row: 1, column: 1, .. })
        ));
        assert!(matches!(
            parse_concentration(&table, 1, 2),
            Err(ExposureError::Format { .. })
        ));
    }
}

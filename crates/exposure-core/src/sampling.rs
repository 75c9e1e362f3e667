//! Concentration of one individual at a sampling year.

use exposure_model::SimulationConfig;

use crate::error::{ExposureError, Result};
use crate::profile::ProfileExtractor;

/// Profile index read for an individual sampled in `sampling_year`.
///
/// Anyone older than `max_age` reads the last recorded value. Otherwise the
/// index is the last timestep before the sampling year begins, counted from
/// the profile's first hour (simulation start for those born earlier).
/// The result may be negative or past the end; callers check it.
pub fn sampling_index(
    config: &SimulationConfig,
    timestep: u64,
    birth_year: i32,
    sampling_year: i32,
    profile_len: usize,
) -> i64 {
    let age = i64::from(sampling_year) - i64::from(birth_year);
    let hours_per_year = config.hours_per_year as i64;
    let timestep = timestep as i64;

    if age > i64::from(config.max_age) {
        // Applies whether or not the individual was born before start.
        profile_len as i64 - 1
    } else if config.start_year > birth_year {
        let elapsed = i64::from(sampling_year) - i64::from(config.start_year);
        elapsed * hours_per_year / timestep - 1
    } else {
        age * hours_per_year / timestep - 1
    }
}

impl ProfileExtractor<'_> {
    /// Concentration of the individual born in `birth_year` when sampled in
    /// `sampling_year`.
    pub fn concentration_at(&mut self, birth_year: i32, sampling_year: i32) -> Result<f64> {
        let simulation = self.simulation();
        if !simulation.contains_year(sampling_year) {
            return Err(ExposureError::invalid_year(
                sampling_year,
                format!(
                    "sampling year is outside the simulation ({}..={})",
                    simulation.start_year(),
                    simulation.end_year()
                ),
            ));
        }
        if sampling_year <= birth_year {
            return Err(ExposureError::invalid_year(
                sampling_year,
                format!("sampling year is not after birth year {birth_year}"),
            ));
        }

        let config = *simulation.config();
        let timestep = simulation.timestep();
        let profile = self.profile_for(birth_year)?;
        let index = sampling_index(&config, timestep, birth_year, sampling_year, profile.len());

        usize::try_from(index)
            .ok()
            .and_then(|i| profile.get(i))
            .ok_or(ExposureError::IndexOutOfProfile {
                birth_year,
                sampling_year,
                index,
                len: profile.len(),
            })
    }
}

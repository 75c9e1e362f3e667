//! A loaded simulation table with its derived indices.

use std::path::Path;

use exposure_ingest::{SimulationTable, read_simulation_table};
use exposure_model::{ConcentrationProfile, CrossSectionalSample, SimulationConfig};

use crate::cohort_index::CohortIndex;
use crate::cross_section;
use crate::error::{ExposureError, Result};
use crate::profile::{self, LifetimeSpan, ProfileExtractor};
use crate::time_index::TimeIndex;

/// Immutable bundle of table, configuration and indices.
///
/// Every query is a pure read; [`ProfileExtractor`] adds caching on top.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    table: SimulationTable,
    time: TimeIndex,
    cohorts: CohortIndex,
    end_year: i32,
}

impl Simulation {
    /// Read a comma-delimited table from `path` and index it.
    pub fn load(path: &Path, config: SimulationConfig) -> Result<Self> {
        let table = read_simulation_table(path)?;
        let simulation = Self::from_table(table, config)?;
        tracing::info!(
            path = %path.display(),
            start_year = simulation.start_year(),
            end_year = simulation.end_year,
            timestep = simulation.timestep(),
            cohorts = simulation.cohorts.len(),
            "loaded simulation table"
        );
        Ok(simulation)
    }

    pub fn from_table(table: SimulationTable, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let time = TimeIndex::build(&table)?;
        if config.hours_per_year % time.timestep() != 0 {
            return Err(ExposureError::format(format!(
                "timestep {} does not divide {} hours per year",
                time.timestep(),
                config.hours_per_year
            )));
        }
        let end_year = time.end_year(config.start_year, config.hours_per_year)?;
        let cohorts = CohortIndex::build(&config, end_year)?;
        tracing::debug!(
            start_year = config.start_year,
            end_year,
            data_rows = time.len(),
            "indexed simulation table"
        );
        Ok(Self {
            config,
            table,
            time,
            cohorts,
            end_year,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn table(&self) -> &SimulationTable {
        &self.table
    }

    pub fn time_index(&self) -> &TimeIndex {
        &self.time
    }

    pub fn cohort_index(&self) -> &CohortIndex {
        &self.cohorts
    }

    pub fn start_year(&self) -> i32 {
        self.config.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn timestep(&self) -> u64 {
        self.time.timestep()
    }

    /// Data rows per simulated year.
    pub fn steps_per_year(&self) -> u64 {
        self.config.hours_per_year / self.time.timestep()
    }

    /// Whether `year` lies in `[start_year, end_year]`.
    pub fn contains_year(&self, year: i32) -> bool {
        (self.config.start_year..=self.end_year).contains(&year)
    }

    pub fn born_before_start(&self, birth_year: i32) -> bool {
        self.config.start_year > birth_year
    }

    /// Portion of a cohort's life covered by the table. Does not check that
    /// `birth_year` is on the cohort grid.
    pub fn lifetime_span(&self, birth_year: i32) -> LifetimeSpan {
        LifetimeSpan::new(&self.config, self.end_year, birth_year)
    }

    /// Extract a profile without caching.
    pub fn profile_for(&self, birth_year: i32) -> Result<ConcentrationProfile> {
        profile::extract_profile(self, birth_year)
    }

    /// Cross-sectional body burden age trend at `year`.
    pub fn cross_section(&self, year: i32) -> Result<CrossSectionalSample> {
        cross_section::cross_section(self, year)
    }

    /// A caching extractor borrowing this simulation.
    pub fn extractor(&self) -> ProfileExtractor<'_> {
        ProfileExtractor::new(self)
    }
}

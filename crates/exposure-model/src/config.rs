//! Simulation run parameters.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Youngest accepted age of the modelled individual at simulation start.
pub const MIN_AGE_AT_MODEL_START: u32 = 0;
/// Oldest accepted age of the modelled individual at simulation start.
pub const MAX_AGE_AT_MODEL_START: u32 = 9;

/// Parameters describing how a simulation table was laid out.
///
/// Every index in `exposure-core` is built from one of these, so the values
/// must match the run that produced the table.
///
/// ```toml
/// start_year = 1930
/// age_at_model_start = 5
/// max_age = 80
/// age_spread = 10
/// cohort_columns = 8
/// hours_per_year = 8760
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Calendar year of simulation hour 0.
    pub start_year: i32,
    /// Age of the modelled individual when the simulation starts.
    pub age_at_model_start: u32,
    /// Oldest age any cohort reaches before leaving its column.
    pub max_age: u32,
    /// Years between successive birth cohorts.
    pub age_spread: u32,
    /// Number of physical cohort columns in the table.
    pub cohort_columns: usize,
    pub hours_per_year: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_year: 1930,
            age_at_model_start: 0,
            max_age: 80,
            age_spread: 10,
            cohort_columns: 8,
            hours_per_year: 8760,
        }
    }
}

impl SimulationConfig {
    /// Set the calendar year of simulation hour 0.
    #[must_use]
    pub fn with_start_year(mut self, year: i32) -> Self {
        self.start_year = year;
        self
    }

    /// Set the reference individual's age at simulation start.
    #[must_use]
    pub fn with_age_at_model_start(mut self, age: u32) -> Self {
        self.age_at_model_start = age;
        self
    }

    /// Set the oldest age a cohort reaches.
    #[must_use]
    pub fn with_max_age(mut self, age: u32) -> Self {
        self.max_age = age;
        self
    }

    /// Set the years between successive birth cohorts.
    #[must_use]
    pub fn with_age_spread(mut self, years: u32) -> Self {
        self.age_spread = years;
        self
    }

    /// Set the number of physical cohort columns.
    #[must_use]
    pub fn with_cohort_columns(mut self, columns: usize) -> Self {
        self.cohort_columns = columns;
        self
    }

    /// Set the simulation hours in one calendar year.
    #[must_use]
    pub fn with_hours_per_year(mut self, hours: u64) -> Self {
        self.hours_per_year = hours;
        self
    }

    /// Check the invariants the indices rely on.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_AGE_AT_MODEL_START..=MAX_AGE_AT_MODEL_START).contains(&self.age_at_model_start) {
            return Err(ConfigError::AgeAtModelStart {
                age: self.age_at_model_start,
                min: MIN_AGE_AT_MODEL_START,
                max: MAX_AGE_AT_MODEL_START,
            });
        }
        if self.max_age == 0 {
            return Err(ConfigError::NotPositive { field: "max_age" });
        }
        if self.age_spread == 0 {
            return Err(ConfigError::NotPositive {
                field: "age_spread",
            });
        }
        if self.cohort_columns == 0 {
            return Err(ConfigError::NotPositive {
                field: "cohort_columns",
            });
        }
        if self.hours_per_year == 0 {
            return Err(ConfigError::NotPositive {
                field: "hours_per_year",
            });
        }
        for (field, value) in [("max_age", self.max_age), ("age_spread", self.age_spread)] {
            if i32::try_from(value).is_err() {
                return Err(ConfigError::TooLarge {
                    field,
                    value,
                    max: i32::MAX.unsigned_abs(),
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|source| ConfigError::Toml { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Simulation hour at which `year` begins, or `None` before the start year.
    pub fn hour_of_year(&self, year: i32) -> Option<u64> {
        let elapsed = u64::try_from(i64::from(year) - i64::from(self.start_year)).ok()?;
        Some(elapsed * self.hours_per_year)
    }

    /// `max_age` as a year offset, saturating at `i32::MAX`.
    pub fn max_age_years(&self) -> i32 {
        i32::try_from(self.max_age).unwrap_or(i32::MAX)
    }

    /// `age_spread` as a year offset, saturating at `i32::MAX`.
    pub fn age_spread_years(&self) -> i32 {
        i32::try_from(self.age_spread).unwrap_or(i32::MAX)
    }

    /// Earliest birth year that still occupies a column at simulation start.
    pub fn first_birth_year(&self) -> i32 {
        self.reference_birth_year()
            .saturating_sub(self.max_age_years())
            .saturating_add(self.age_spread_years())
    }

    /// Birth year of the individual who is `age_at_model_start` at simulation start.
    pub fn reference_birth_year(&self) -> i32 {
        let age = i32::try_from(self.age_at_model_start).unwrap_or(i32::MAX);
        self.start_year.saturating_sub(age)
    }
}

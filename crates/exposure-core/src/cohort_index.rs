//! Birth year to table column mapping.
//!
//! Cohorts are born every `age_spread` years and share `cohort_columns`
//! physical columns. The `i`-th cohort (0-based, oldest first) lands in
//! column `cohort_columns - (i mod cohort_columns)`, so the columns count
//! down from the last one and wrap. A column is handed to a new cohort every
//! `cohort_columns * age_spread` years.

use std::collections::BTreeMap;

use exposure_model::SimulationConfig;

use crate::error::{ExposureError, Result};

/// Column assigned to the cohort at enumeration `index`.
///
/// Columns are 1-based: column 0 of the table holds the hour.
pub fn rotating_column(index: usize, cohort_columns: usize) -> usize {
    cohort_columns - index % cohort_columns
}

#[derive(Debug, Clone)]
pub struct CohortIndex {
    columns: BTreeMap<i32, usize>,
    first_birth_year: i32,
    end_year: i32,
    age_spread: i32,
    max_age: i32,
    cohort_columns: usize,
}

impl CohortIndex {
    /// Enumerate birth years from [`SimulationConfig::first_birth_year`] up to
    /// (excluding) `end_year`.
    ///
    /// Fails when `config` does not validate.
    pub fn build(config: &SimulationConfig, end_year: i32) -> Result<Self> {
        config.validate()?;
        let first_birth_year = config.first_birth_year();
        let age_spread = config.age_spread_years();
        let cohort_columns = config.cohort_columns;

        let columns: BTreeMap<i32, usize> = (0usize..)
            .map_while(|i| {
                let offset = i32::try_from(i).ok()?.checked_mul(age_spread)?;
                Some((i, first_birth_year.checked_add(offset)?))
            })
            .take_while(|(_, year)| *year < end_year)
            .map(|(i, year)| (year, rotating_column(i, cohort_columns)))
            .collect();

        tracing::debug!(
            cohorts = columns.len(),
            first_birth_year,
            end_year,
            cohort_columns,
            "built cohort index"
        );

        Ok(Self {
            columns,
            first_birth_year,
            end_year,
            age_spread,
            max_age: config.max_age_years(),
            cohort_columns,
        })
    }

    pub fn column_for_birth_year(&self, year: i32) -> Result<usize> {
        self.columns.get(&year).copied().ok_or_else(|| {
            ExposureError::invalid_year(
                year,
                format!(
                    "not a cohort birth year (cohorts start at {} every {} years, before {})",
                    self.first_birth_year, self.age_spread, self.end_year
                ),
            )
        })
    }

    pub fn contains(&self, year: i32) -> bool {
        self.columns.contains_key(&year)
    }

    /// Birth years in ascending order.
    pub fn birth_years(&self) -> impl Iterator<Item = i32> + '_ {
        self.columns.keys().copied()
    }

    pub fn first_birth_year(&self) -> i32 {
        self.first_birth_year
    }

    pub fn cohort_columns(&self) -> usize {
        self.cohort_columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Birth year of the youngest live cohort in `column` at `year`, derived
    /// from the rotation arithmetic alone.
    ///
    /// The first cohort placed in `column` has enumeration index
    /// `(cohort_columns - column) mod cohort_columns`; later occupants are
    /// exactly one rotation cycle younger each.
    pub fn owner_by_rotation(&self, column: usize, year: i32) -> Option<i32> {
        if column == 0 || column > self.cohort_columns {
            return None;
        }
        let residue = ((self.cohort_columns - column) % self.cohort_columns) as i64;
        let spread = i64::from(self.age_spread);
        let cycle = self.cohort_columns as i64 * spread;

        let first_occupant = i64::from(self.first_birth_year) + residue * spread;
        let oldest_age = i64::from(year) - first_occupant;
        if oldest_age <= 0 {
            return None;
        }
        // Wrap the age into (0, cycle]: the youngest occupant already born.
        let age = (oldest_age - 1).rem_euclid(cycle) + 1;
        if age > i64::from(self.max_age) {
            return None;
        }
        let birth_year = i64::from(year) - age;
        if birth_year >= i64::from(self.end_year) {
            return None;
        }
        i32::try_from(birth_year).ok()
    }

    /// Birth year of the youngest live cohort in `column` at `year`, found by
    /// scanning the birth-year map.
    pub fn owner_by_lookup(&self, column: usize, year: i32) -> Option<i32> {
        self.columns
            .iter()
            .filter(|(_, assigned)| **assigned == column)
            .map(|(birth_year, _)| *birth_year)
            .filter(|birth_year| {
                let age = year - birth_year;
                age > 0 && age <= self.max_age
            })
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_index() -> CohortIndex {
        let config = SimulationConfig::default().with_age_at_model_start(5);
        CohortIndex::build(&config, 2030).unwrap()
    }

    #[test]
    fn test_rotating_column_counts_down_and_wraps() {
        let columns: Vec<usize> = (0..10).map(|i| rotating_column(i, 8)).collect();
        assert_eq!(columns, vec![8, 7, 6, 5, 4, 3, 2, 1, 8, 7]);
    }

    #[test]
    fn test_birth_year_grid() {
        let index = fixture_index();
        assert_eq!(index.first_birth_year(), 1855);
        let years: Vec<i32> = index.birth_years().collect();
        assert_eq!(years.first(), Some(&1855));
        assert_eq!(years.last(), Some(&2025));
        assert_eq!(index.len(), 18);
    }

    #[test]
    fn test_column_for_birth_year() {
        let index = fixture_index();
        assert_eq!(index.column_for_birth_year(1855).unwrap(), 8);
        assert_eq!(index.column_for_birth_year(1925).unwrap(), 1);
        assert_eq!(index.column_for_birth_year(1935).unwrap(), 8);
        assert_eq!(index.column_for_birth_year(1985).unwrap(), 3);
    }

    #[test]
    fn test_invalid_birth_years() {
        let index = fixture_index();
        for year in [1845, 1986, 2030, 2035] {
            assert!(
                matches!(
                    index.column_for_birth_year(year),
                    Err(ExposureError::InvalidYear { year: y, .. }) if y == year
                ),
                "{year} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_when_end_precedes_first_cohort() {
        let config = SimulationConfig::default();
        let index = CohortIndex::build(&config, 1800).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_build_rejects_degenerate_config() {
        let cases = [
            SimulationConfig::default().with_cohort_columns(0),
            SimulationConfig::default().with_age_spread(0),
            SimulationConfig::default().with_max_age(0),
            SimulationConfig::default().with_max_age(u32::MAX),
        ];
        for config in cases {
            assert!(
                matches!(
                    CohortIndex::build(&config, 2000),
                    Err(ExposureError::Config(_))
                ),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_build_stops_at_year_range_limit() {
        let config = SimulationConfig::default()
            .with_start_year(i32::MAX - 100)
            .with_age_spread(50);
        let index = CohortIndex::build(&config, i32::MAX).unwrap();
        let years: Vec<i32> = index.birth_years().collect();
        assert_eq!(years.first(), Some(&(i32::MAX - 130)));
        assert!(years.iter().all(|year| *year < i32::MAX));
    }

    #[test]
    fn test_owner_at_year() {
        let index = fixture_index();
        // 1905 and 1985 both sit in column 3; by 2004 the 1905 cohort is 99.
        assert_eq!(index.owner_by_rotation(3, 2004), Some(1985));
        assert_eq!(index.owner_by_lookup(3, 2004), Some(1985));
        // In 1985 the 1905 cohort is exactly max age; the newborn is not counted.
        assert_eq!(index.owner_by_rotation(3, 1985), Some(1905));
        assert_eq!(index.owner_by_lookup(3, 1985), Some(1905));
    }

    #[test]
    fn test_owner_outside_columns() {
        let index = fixture_index();
        assert_eq!(index.owner_by_rotation(0, 2000), None);
        assert_eq!(index.owner_by_rotation(9, 2000), None);
        assert_eq!(index.owner_by_lookup(9, 2000), None);
    }

    #[test]
    fn test_owner_before_first_occupant_born() {
        let index = fixture_index();
        // Column 1 first receives the 1925 cohort.
        assert_eq!(index.owner_by_rotation(1, 1925), None);
        assert_eq!(index.owner_by_lookup(1, 1925), None);
        assert_eq!(index.owner_by_rotation(1, 1926), Some(1925));
    }

    #[test]
    fn test_owner_formulations_agree_on_fixture_grid() {
        let index = fixture_index();
        for year in 1930..=2030 {
            for column in 1..=8 {
                assert_eq!(
                    index.owner_by_rotation(column, year),
                    index.owner_by_lookup(column, year),
                    "column {column}, year {year}"
                );
            }
        }
    }
}

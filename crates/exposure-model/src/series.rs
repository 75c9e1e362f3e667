//! Derived series handed to downstream consumers (plotting, survey comparison).

use serde::{Deserialize, Serialize};

/// Lifetime concentration series for one birth cohort.
///
/// `values[i]` is the concentration recorded at simulation hour
/// `start_hour + i * timestep`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationProfile {
    pub birth_year: i32,
    pub start_hour: u64,
    pub timestep: u64,
    pub values: Vec<f64>,
}

impl ConcentrationProfile {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Pairs each value with the simulation hour it was recorded at.
    pub fn hourly(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        let start = self.start_hour;
        let step = self.timestep;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, value)| (start + i as u64 * step, *value))
    }
}

/// One live cohort observed in a cross-sectional sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CohortPoint {
    pub age: u32,
    pub birth_year: i32,
    /// Physical table column (1-based; column 0 holds the hour).
    pub column: usize,
    pub concentration: f64,
}

/// Cross-sectional body burden age trend for one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionalSample {
    pub year: i32,
    /// Sorted ascending by age.
    pub points: Vec<CohortPoint>,
}

impl CrossSectionalSample {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn ages(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.age).collect()
    }

    pub fn concentrations(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.concentration).collect()
    }

    /// Split into parallel `(ages, concentrations)` vectors.
    pub fn into_series(self) -> (Vec<u32>, Vec<f64>) {
        self.points
            .into_iter()
            .map(|p| (p.age, p.concentration))
            .unzip()
    }
}

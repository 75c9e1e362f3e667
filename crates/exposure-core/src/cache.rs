//! Per-extractor profile memoization.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use exposure_model::ConcentrationProfile;

/// Append-only map from birth year to extracted profile.
///
/// Entries are never evicted: the table behind them is immutable, so a cache
/// lives exactly as long as the extractor that owns it.
#[derive(Debug, Default)]
pub struct ProfileCache {
    entries: HashMap<i32, ConcentrationProfile>,
    hits: u64,
    misses: u64,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, birth_year: i32) -> Option<&ConcentrationProfile> {
        self.entries.get(&birth_year)
    }

    pub fn contains(&self, birth_year: i32) -> bool {
        self.entries.contains_key(&birth_year)
    }

    /// Return the cached profile, computing and storing it on a miss.
    /// Nothing is stored when `compute` fails.
    pub fn get_or_try_insert_with<E, F>(
        &mut self,
        birth_year: i32,
        compute: F,
    ) -> Result<&ConcentrationProfile, E>
    where
        F: FnOnce() -> Result<ConcentrationProfile, E>,
    {
        match self.entries.entry(birth_year) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let profile = compute()?;
                self.misses += 1;
                tracing::debug!(birth_year, points = profile.len(), "cached profile");
                Ok(entry.insert(profile))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

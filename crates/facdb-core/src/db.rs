// crates/facdb-core/src/db.rs

//! # Service Facade
//!
//! [`FacilityDb`] owns the loaded [`Dataset`] and is what request handlers
//! hold. Construction is all-or-nothing: a value only exists once the
//! snapshot is parsed and every index is built.
//!
//! Queries take the read side of a `RwLock`, so any number of threads can
//! query at once. The only writer is [`FacilityDb::reload`], which builds the
//! replacement dataset before taking the write lock and then swaps it in.

use crate::common::DbStats;
use crate::distance::UnitSystem;
use crate::error::Result;
use crate::model::{Facility, FacilityWithDistance};
use crate::search::Dataset;
use crate::traits::FacilitySearch;
use crate::Catalog;
use std::collections::BTreeMap;
use std::io::Read;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

#[derive(Debug)]
pub struct FacilityDb {
    dataset: RwLock<Dataset>,
}

impl FacilityDb {
    /// Loads a snapshot payload and builds every index.
    ///
    /// Fails with the first error from either stage; no partially built
    /// database is ever returned.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
        let dataset = Dataset::from_snapshot(bytes)?;
        Ok(Self::from_dataset(dataset))
    }

    /// Streaming variant of [`FacilityDb::from_snapshot`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let dataset = Dataset::from_catalog(Catalog::from_reader(reader)?);
        Ok(Self::from_dataset(dataset))
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        tracing::info!(records = dataset.catalog().len(), "facility catalog loaded");
        Self {
            dataset: RwLock::new(dataset),
        }
    }

    /// Replaces the whole catalog with a new snapshot.
    ///
    /// The new dataset is parsed and indexed before the write lock is taken,
    /// so readers only block for the swap. On error the current catalog stays
    /// in place.
    pub fn reload(&self, bytes: &[u8]) -> Result<DbStats> {
        let fresh = Dataset::from_snapshot(bytes)?;
        let stats = fresh.stats();

        let mut guard = self.dataset.write().unwrap_or_else(PoisonError::into_inner);
        *guard = fresh;
        drop(guard);

        tracing::info!(records = stats.total, "facility catalog reloaded");
        Ok(stats)
    }

    /// The complete primary code -> record mapping, for bulk export.
    pub fn raw_data(&self) -> BTreeMap<String, Facility> {
        self.read().catalog().to_map()
    }

    // The guarded value is only ever replaced whole, so a poisoned lock still
    // holds a complete dataset.
    fn read(&self) -> RwLockReadGuard<'_, Dataset> {
        self.dataset.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FacilitySearch for FacilityDb {
    fn get_by_code(&self, code: &str) -> Result<Facility> {
        self.read().get_by_code(code)
    }

    fn search(&self, query: &str, limit: usize, offset: usize) -> Vec<Facility> {
        self.read().search(query, limit, offset)
    }

    fn nearby_with_distance(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
        limit: usize,
        units: UnitSystem,
    ) -> Vec<FacilityWithDistance> {
        self.read().nearby_with_distance(lat, lon, radius_km, limit, units)
    }

    fn in_bounding_box(
        &self,
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Vec<Facility> {
        self.read().in_bounding_box(min_lat, max_lat, min_lon, max_lon)
    }

    fn all(&self, limit: usize, offset: usize) -> Vec<Facility> {
        self.read().all(limit, offset)
    }

    fn by_locality(&self, locality: &str) -> Vec<Facility> {
        self.read().by_locality(locality)
    }

    fn by_country(&self, country: &str) -> Vec<Facility> {
        self.read().by_country(country)
    }

    fn by_region(&self, region: &str) -> Vec<Facility> {
        self.read().by_region(region)
    }

    fn countries(&self) -> BTreeMap<String, usize> {
        self.read().countries()
    }

    fn regions_in_country(&self, country: &str) -> BTreeMap<String, usize> {
        self.read().regions_in_country(country)
    }

    fn stats(&self) -> DbStats {
        self.read().stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FacDbError;
    use rstest::rstest;
    use std::sync::Arc;
    use std::thread;

    const ONE: &[u8] = br#"{"KJFK": {"iata": "JFK", "name": "John F Kennedy", "country": "US",
                             "lat": 40.6398, "lon": -73.7789}}"#;
    const TWO: &[u8] = br#"{"KJFK": {"iata": "JFK", "name": "John F Kennedy", "country": "US"},
                             "EGLL": {"iata": "LHR", "name": "Heathrow", "country": "GB"}}"#;

    #[rstest]
    fn malformed_snapshot_fails_construction() {
        let err = FacilityDb::from_snapshot(b"[]").unwrap_err();
        assert!(matches!(err, FacDbError::Parse(_)));
    }

    #[rstest]
    fn reader_and_slice_agree() {
        let a = FacilityDb::from_snapshot(TWO).unwrap();
        let b = FacilityDb::from_reader(TWO).unwrap();
        assert_eq!(a.raw_data(), b.raw_data());
    }

    #[rstest]
    fn reload_swaps_the_whole_catalog() {
        let db = FacilityDb::from_snapshot(ONE).unwrap();
        assert_eq!(db.stats().total, 1);

        let stats = db.reload(TWO).unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(db.get_by_code("lhr").unwrap().code, "EGLL");
    }

    #[rstest]
    fn failed_reload_keeps_the_current_catalog() {
        let db = FacilityDb::from_snapshot(TWO).unwrap();
        assert!(db.reload(b"{ nope").is_err());
        assert_eq!(db.stats().total, 2);
    }

    #[rstest]
    fn raw_data_exports_every_record() {
        let db = FacilityDb::from_snapshot(TWO).unwrap();
        let data = db.raw_data();
        assert_eq!(data.len(), 2);
        assert_eq!(data["EGLL"].alt_code, "LHR");
    }

    #[rstest]
    fn concurrent_readers_see_consistent_results() {
        let db = Arc::new(FacilityDb::from_snapshot(TWO).unwrap());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let db = Arc::clone(&db);
                thread::spawn(move || {
                    for _ in 0..100 {
                        assert_eq!(db.get_by_code("JFK").unwrap().code, "KJFK");
                        assert_eq!(db.search("heathrow", 10, 0).len(), 1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}

// crates/facdb-core/src/traits.rs
use crate::common::DbStats;
use crate::distance::UnitSystem;
use crate::error::{FacDbError, Result};
use crate::model::{Facility, FacilityWithDistance};
use std::collections::BTreeMap;

/// Shortest query [`FacilitySearch::suggest`] answers.
pub const MIN_SUGGEST_LEN: usize = 2;

/// The query surface of the catalog.
///
/// Implemented by the immutable [`Dataset`](crate::Dataset) and by the
/// [`FacilityDb`](crate::FacilityDb) facade, which takes the read side of its
/// lock for the duration of each call. Every method is a pure read: results
/// are owned copies, and a failure repeats identically on retry.
pub trait FacilitySearch {
    /// Looks a record up by primary code, then by alternate code.
    ///
    /// Case-insensitive. An alternate code shared by several records
    /// resolves to the one with the smallest primary code. When two snapshot
    /// keys differ only in case, the primary code lookup reaches the later
    /// key; the earlier record is still listed by `all` and the grouping
    /// queries.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use facdb_core::{FacilityDb, FacilitySearch};
    ///
    /// let db = FacilityDb::load_from_path("data/airports.json.gz").unwrap();
    /// let jfk = db.get_by_code("jfk").unwrap();
    /// assert_eq!(jfk.code, "KJFK");
    /// ```
    fn get_by_code(&self, code: &str) -> Result<Facility>;

    /// Text search over codes, names and localities.
    ///
    /// Exact primary/alternate code matches are included first, then every
    /// record whose name or locality contains the query (case-insensitive).
    /// Each primary code appears at most once; results are ordered by name,
    /// then primary code, before the `offset`/`limit` window is applied.
    /// A blank query returns nothing.
    ///
    /// This is a linear scan over the whole catalog on every call.
    fn search(&self, query: &str, limit: usize, offset: usize) -> Vec<Facility>;

    /// Autocomplete: [`FacilitySearch::search`] from offset zero, refusing
    /// queries shorter than [`MIN_SUGGEST_LEN`] characters.
    fn suggest(&self, query: &str, limit: usize) -> Result<Vec<Facility>> {
        let len = query.trim().chars().count();
        if len < MIN_SUGGEST_LEN {
            return Err(FacDbError::InvalidInput(format!(
                "query too short ({len} characters, minimum {MIN_SUGGEST_LEN})"
            )));
        }
        Ok(self.search(query, limit, 0))
    }

    /// Records within `radius_km` of a point, nearest first, at most `limit`.
    fn nearby(&self, lat: f64, lon: f64, radius_km: f64, limit: usize) -> Vec<Facility> {
        self.nearby_with_distance(lat, lon, radius_km, limit, UnitSystem::Metric)
            .into_iter()
            .map(|hit| hit.facility)
            .collect()
    }

    /// Like [`FacilitySearch::nearby`], with each distance reported in
    /// `units`. Filtering and ordering always use kilometers.
    fn nearby_with_distance(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
        limit: usize,
        units: UnitSystem,
    ) -> Vec<FacilityWithDistance>;

    /// Records inside an axis-aligned box, bounds inclusive.
    ///
    /// Bounds are not validated: `min > max` on either axis matches nothing.
    /// No ordering is promised.
    fn in_bounding_box(
        &self,
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Vec<Facility>;

    /// All records by ascending primary code, paginated like `search`.
    fn all(&self, limit: usize, offset: usize) -> Vec<Facility>;

    /// Records in one locality (case-insensitive).
    fn by_locality(&self, locality: &str) -> Vec<Facility>;

    /// Records in one country (case-insensitive).
    fn by_country(&self, country: &str) -> Vec<Facility>;

    /// Records in one region (case-insensitive).
    fn by_region(&self, region: &str) -> Vec<Facility>;

    /// Country code -> record count.
    fn countries(&self) -> BTreeMap<String, usize>;

    /// Region -> record count within one country; empty for unknown countries.
    fn regions_in_country(&self, country: &str) -> BTreeMap<String, usize>;

    fn stats(&self) -> DbStats;
}

// crates/facdb-core/src/search.rs

//! # Query Engine
//!
//! [`Dataset`] pairs a [`Catalog`] with the [`CatalogIndex`] built from it and
//! answers every [`FacilitySearch`] query without locking. It is immutable
//! once built; the [`FacilityDb`](crate::FacilityDb) facade shares it behind a
//! read-write lock.

use crate::catalog::Catalog;
use crate::common::{paginate, DbStats};
use crate::distance::{convert_distance, great_circle_distance_km, UnitSystem};
use crate::error::{FacDbError, Result};
use crate::index::CatalogIndex;
use crate::model::{Facility, FacilityId, FacilityWithDistance};
use crate::text::{fold_code, fold_text};
use crate::traits::FacilitySearch;
use std::collections::{BTreeMap, HashSet};

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    catalog: Catalog,
    index: CatalogIndex,
}

impl Dataset {
    /// Parses a snapshot and indexes it. The first error wins.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_catalog(Catalog::from_slice(bytes)?))
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        let index = CatalogIndex::build(&catalog);
        Self { catalog, index }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    fn resolve(&self, ids: &[FacilityId]) -> Vec<Facility> {
        ids.iter()
            .filter_map(|id| self.catalog.get(*id))
            .cloned()
            .collect()
    }
}

impl FacilitySearch for Dataset {
    fn get_by_code(&self, code: &str) -> Result<Facility> {
        let key = fold_code(code);

        // 1. Primary code
        if let Some(f) = self.index.by_code(&key).and_then(|id| self.catalog.get(id)) {
            return Ok(f.clone());
        }

        // 2. First alternate code match (smallest primary code)
        self.index
            .by_alt_code(&key)
            .first()
            .and_then(|id| self.catalog.get(*id))
            .cloned()
            .ok_or(FacDbError::NotFound(key))
    }

    fn search(&self, query: &str, limit: usize, offset: usize) -> Vec<Facility> {
        let q = fold_text(query.trim());
        if q.is_empty() {
            return Vec::new();
        }

        let mut seen: HashSet<FacilityId> = HashSet::new();
        let mut ids: Vec<FacilityId> = Vec::new();

        // 1. Exact code matches
        let code = fold_code(&q);
        let exact = self.index.by_code(&code).into_iter();
        for id in exact.chain(self.index.by_alt_code(&code).iter().copied()) {
            if seen.insert(id) {
                ids.push(id);
            }
        }

        // 2. Substring pass over name and locality
        for (id, _) in self.catalog.iter() {
            if seen.contains(&id) {
                continue;
            }
            let Some(key) = self.index.search_key(id) else {
                continue;
            };
            if key.name.contains(&q) || key.locality.contains(&q) {
                seen.insert(id);
                ids.push(id);
            }
        }

        // 3. Name order, primary code breaks ties
        let mut hits: Vec<&Facility> = ids.iter().filter_map(|id| self.catalog.get(*id)).collect();
        hits.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));

        paginate(&hits, limit, offset)
            .iter()
            .map(|f| (*f).clone())
            .collect()
    }

    fn nearby_with_distance(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
        limit: usize,
        units: UnitSystem,
    ) -> Vec<FacilityWithDistance> {
        let mut hits: Vec<(f64, &Facility)> = self
            .catalog
            .records()
            .iter()
            .filter_map(|f| {
                let d = great_circle_distance_km(lat, lon, f.lat, f.lon);
                // NaN never satisfies the comparison, so it is dropped here.
                (d <= radius_km).then_some((d, f))
            })
            .collect();

        // Stable sort: equal distances keep primary code order.
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        hits.truncate(limit);

        hits.into_iter()
            .map(|(km, f)| {
                let (distance, distance_unit) = convert_distance(km, units);
                FacilityWithDistance {
                    facility: f.clone(),
                    distance,
                    distance_unit,
                }
            })
            .collect()
    }

    fn in_bounding_box(
        &self,
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Vec<Facility> {
        self.catalog
            .records()
            .iter()
            .filter(|f| {
                f.lat >= min_lat && f.lat <= max_lat && f.lon >= min_lon && f.lon <= max_lon
            })
            .cloned()
            .collect()
    }

    fn all(&self, limit: usize, offset: usize) -> Vec<Facility> {
        // The arena is already in ascending primary code order.
        paginate(self.catalog.records(), limit, offset).to_vec()
    }

    fn by_locality(&self, locality: &str) -> Vec<Facility> {
        self.resolve(self.index.by_locality(&fold_text(locality)))
    }

    fn by_country(&self, country: &str) -> Vec<Facility> {
        self.resolve(self.index.by_country(&fold_code(country)))
    }

    fn by_region(&self, region: &str) -> Vec<Facility> {
        self.resolve(self.index.by_region(&fold_text(region)))
    }

    fn countries(&self) -> BTreeMap<String, usize> {
        self.index
            .countries()
            .map(|(code, count)| (code.to_owned(), count))
            .collect()
    }

    fn regions_in_country(&self, country: &str) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for id in self.index.by_country(&fold_code(country)) {
            let Some(f) = self.catalog.get(*id) else {
                continue;
            };
            if !f.region.is_empty() {
                *counts.entry(f.region.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    fn stats(&self) -> DbStats {
        DbStats {
            total: self.catalog.len(),
            countries: self.index.country_count(),
            localities: self.index.locality_count(),
            regions: self.index.region_count(),
            with_alternate_code: self.index.with_alt_code_count(),
        }
    }
}

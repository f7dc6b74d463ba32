// crates/facdb-core/src/index.rs

//! # Index Builder
//!
//! Secondary lookup tables derived once from a [`Catalog`]. Buckets hold
//! [`FacilityId`]s that resolve through the catalog arena.
//!
//! Because the arena is in ascending primary code order and the build is a
//! single forward pass, every bucket ends up in ascending primary code order
//! without an explicit sort. `get_by_code` relies on this: a shared
//! alternate code resolves to the record with the smallest primary code.

use crate::catalog::Catalog;
use crate::model::FacilityId;
use crate::text::{fold_code, fold_text};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Pre-folded text the substring scan compares against.
#[derive(Clone, Debug, Default)]
pub(crate) struct SearchKey {
    pub(crate) name: String,
    pub(crate) locality: String,
}

#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    by_code: HashMap<String, FacilityId>,
    by_alt_code: HashMap<String, Vec<FacilityId>>,
    by_locality: HashMap<String, Vec<FacilityId>>,
    by_country: HashMap<String, Vec<FacilityId>>,
    by_region: HashMap<String, Vec<FacilityId>>,
    search_keys: Vec<SearchKey>,
}

impl CatalogIndex {
    /// Builds every index in one pass over the catalog.
    ///
    /// Never fails: empty fields are simply not indexed. When two snapshot
    /// keys fold to the same upper-cased code the later one owns the primary
    /// slot.
    pub fn build(catalog: &Catalog) -> Self {
        let mut index = CatalogIndex {
            by_code: HashMap::with_capacity(catalog.len()),
            search_keys: Vec::with_capacity(catalog.len()),
            ..Default::default()
        };

        for (id, facility) in catalog.iter() {
            match index.by_code.entry(fold_code(&facility.code)) {
                Entry::Occupied(mut slot) => {
                    tracing::warn!(
                        code = %facility.code,
                        replaced = *slot.get(),
                        "primary code collides after case folding"
                    );
                    slot.insert(id);
                }
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
            }

            if !facility.alt_code.is_empty() {
                push(&mut index.by_alt_code, fold_code(&facility.alt_code), id);
            }
            if !facility.locality.is_empty() {
                push(&mut index.by_locality, fold_text(&facility.locality), id);
            }
            if !facility.country.is_empty() {
                push(&mut index.by_country, fold_code(&facility.country), id);
            }
            if !facility.region.is_empty() {
                push(&mut index.by_region, fold_text(&facility.region), id);
            }

            index.search_keys.push(SearchKey {
                name: fold_text(&facility.name),
                locality: fold_text(&facility.locality),
            });
        }

        tracing::debug!(
            codes = index.by_code.len(),
            alt_codes = index.by_alt_code.len(),
            localities = index.by_locality.len(),
            countries = index.by_country.len(),
            regions = index.by_region.len(),
            "built catalog indexes"
        );

        index
    }

    /// Primary index lookup; `code` must already be upper-cased.
    pub fn by_code(&self, code: &str) -> Option<FacilityId> {
        self.by_code.get(code).copied()
    }

    /// Alternate code bucket; `code` must already be upper-cased.
    pub fn by_alt_code(&self, code: &str) -> &[FacilityId] {
        bucket(&self.by_alt_code, code)
    }

    /// Locality bucket; `locality` must already be lower-cased.
    pub fn by_locality(&self, locality: &str) -> &[FacilityId] {
        bucket(&self.by_locality, locality)
    }

    /// Country bucket; `country` must already be upper-cased.
    pub fn by_country(&self, country: &str) -> &[FacilityId] {
        bucket(&self.by_country, country)
    }

    /// Region bucket; `region` must already be lower-cased.
    pub fn by_region(&self, region: &str) -> &[FacilityId] {
        bucket(&self.by_region, region)
    }

    /// Country keys with their bucket sizes.
    pub fn countries(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.by_country.iter().map(|(k, v)| (k.as_str(), v.len()))
    }

    pub fn code_count(&self) -> usize {
        self.by_code.len()
    }

    pub fn country_count(&self) -> usize {
        self.by_country.len()
    }

    pub fn locality_count(&self) -> usize {
        self.by_locality.len()
    }

    pub fn region_count(&self) -> usize {
        self.by_region.len()
    }

    /// Number of records carrying a non-empty alternate code.
    pub fn with_alt_code_count(&self) -> usize {
        self.by_alt_code.values().map(Vec::len).sum()
    }

    pub(crate) fn search_key(&self, id: FacilityId) -> Option<&SearchKey> {
        self.search_keys.get(id as usize)
    }
}

fn push(map: &mut HashMap<String, Vec<FacilityId>>, key: String, id: FacilityId) {
    map.entry(key).or_default().push(id);
}

fn bucket<'a>(map: &'a HashMap<String, Vec<FacilityId>>, key: &str) -> &'a [FacilityId] {
    map.get(key).map(Vec::as_slice).unwrap_or(&[])
}

// crates/facdb-core/src/catalog.rs

//! # Catalog Store
//!
//! The authoritative set of facility records, parsed once from a snapshot.
//! Records live in a flat arena ordered by primary code; everything else in
//! the crate refers to them by [`FacilityId`].

use crate::error::Result;
use crate::model::{Facility, FacilityId};
use crate::raw::SnapshotRaw;
use std::collections::BTreeMap;
use std::io::Read;

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<Facility>,
}

impl Catalog {
    /// Parses a snapshot payload.
    ///
    /// Fails with [`FacDbError::Parse`](crate::FacDbError::Parse) unless the
    /// payload is a JSON object mapping codes to facility objects. Nothing is
    /// kept from a failed parse.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: SnapshotRaw = serde_json::from_slice(bytes)?;
        Ok(Self::from_raw(raw))
    }

    /// Streaming variant of [`Catalog::from_slice`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: SnapshotRaw = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: SnapshotRaw) -> Self {
        // BTreeMap iteration gives ascending key order.
        let records = raw
            .into_iter()
            .map(|(code, entry)| Facility::from_raw(code, entry))
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: FacilityId) -> Option<&Facility> {
        self.records.get(id as usize)
    }

    /// All records in ascending primary code order.
    pub fn records(&self) -> &[Facility] {
        &self.records
    }

    /// Records paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (FacilityId, &Facility)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, f)| (i as FacilityId, f))
    }

    /// The full primary code -> record mapping, for bulk export.
    pub fn to_map(&self) -> BTreeMap<String, Facility> {
        self.records
            .iter()
            .map(|f| (f.code.clone(), f.clone()))
            .collect()
    }
}

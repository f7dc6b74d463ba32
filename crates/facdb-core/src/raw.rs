// crates/facdb-core/src/raw.rs

use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw facility entry as it comes from the snapshot JSON:
/// ```json
/// "KJFK": {
///   "icao": "KJFK", "iata": "JFK",
///   "name": "John F Kennedy International Airport",
///   "city": "New York", "state": "New-York", "country": "US",
///   "elevation": 13, "lat": 40.63980103, "lon": -73.77890015,
///   "tz": "America/New_York"
/// }
/// ```
/// Missing fields take their zero value; a field of the wrong JSON type is a
/// parse failure for the whole snapshot. The primary code is the map key,
/// so the `icao` field is not read.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FacilityRaw {
    #[serde(alias = "alt_code")]
    pub iata: String,
    pub name: String,
    #[serde(alias = "locality")]
    pub city: String,
    #[serde(alias = "region")]
    pub state: String,
    pub country: String,
    pub elevation: i32,
    pub lat: f64,
    pub lon: f64,
    #[serde(alias = "timezone")]
    pub tz: String,
}

/// The whole snapshot: primary code -> attributes.
///
/// A `BTreeMap` keeps entries in ascending key order, which the catalog arena
/// inherits.
pub type SnapshotRaw = BTreeMap<String, FacilityRaw>;

// crates/facdb-core/src/model.rs

use crate::distance::{convert_elevation, DistanceUnit, ElevationUnit, UnitSystem};
use crate::raw::FacilityRaw;
use serde::{Deserialize, Serialize};

/// Position of a record in the catalog arena.
///
/// Secondary indexes store these ids and resolve them through the catalog,
/// so no record is ever copied into an index.
pub type FacilityId = u32;

/// One physical facility.
///
/// Field names on the wire follow the snapshot format (`icao`, `iata`,
/// `city`, ...), so a bulk export can be fed back in as a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// Primary code; unique and the only basis for identity.
    #[serde(rename = "icao")]
    pub code: String,
    /// Alternate code; may be empty or shared by several records.
    #[serde(rename = "iata")]
    pub alt_code: String,
    pub name: String,
    #[serde(rename = "city")]
    pub locality: String,
    #[serde(rename = "state")]
    pub region: String,
    pub country: String,
    #[serde(rename = "elevation")]
    pub elevation_ft: i32,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "tz")]
    pub timezone: String,
}

impl Facility {
    /// Builds a record from its snapshot key and raw attributes.
    pub fn from_raw(code: String, raw: FacilityRaw) -> Self {
        Self {
            code,
            alt_code: raw.iata,
            name: raw.name,
            locality: raw.city,
            region: raw.state,
            country: raw.country,
            elevation_ft: raw.elevation,
            lat: raw.lat,
            lon: raw.lon,
            timezone: raw.tz,
        }
    }

    /// Alternate code, `None` when the record has none.
    pub fn alt_code(&self) -> Option<&str> {
        if self.alt_code.is_empty() {
            None
        } else {
            Some(&self.alt_code)
        }
    }

    /// Elevation converted for display.
    pub fn elevation(&self, units: UnitSystem) -> (f64, ElevationUnit) {
        convert_elevation(self.elevation_ft, units)
    }
}

/// A facility plus its distance from a query point.
///
/// Produced per query and never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacilityWithDistance {
    #[serde(flatten)]
    pub facility: Facility,
    pub distance: f64,
    pub distance_unit: DistanceUnit,
}

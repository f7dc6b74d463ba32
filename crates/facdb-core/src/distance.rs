// crates/facdb-core/src/distance.rs

//! # Distance Utility
//!
//! Great-circle distance plus the metric/imperial conversions used when
//! reporting distances and elevations. Every comparison in the query engine
//! happens in kilometers; the conversions here only touch displayed values.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const KM_TO_MILES: f64 = 0.621371;
pub const FEET_TO_METERS: f64 = 0.3048;

/// Great-circle distance in kilometers between two points in decimal degrees.
///
/// No range checks are made: NaN or infinite input yields NaN or infinite
/// output.
///
/// # Examples
///
/// ```rust
/// use facdb_core::distance::great_circle_distance_km;
///
/// // JFK -> LAX
/// let d = great_circle_distance_km(40.6398, -73.7789, 33.9416, -118.4085);
/// assert!(d > 3900.0 && d < 4000.0);
/// ```
pub fn great_circle_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Measurement system requested for displayed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    #[default]
    Imperial,
}

impl UnitSystem {
    /// Normalizes a raw unit parameter.
    ///
    /// Case-insensitive. `metric`, `m`, `km` and `kilometers` select
    /// [`UnitSystem::Metric`]; anything else, the empty string included,
    /// falls back to [`UnitSystem::Imperial`].
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "metric" | "m" | "km" | "kilometers" => UnitSystem::Metric,
            _ => UnitSystem::Imperial,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl FromStr for UnitSystem {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UnitSystem::parse(s))
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label attached to a converted distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "mi")]
    Miles,
}

impl DistanceUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label attached to a converted elevation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElevationUnit {
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "ft")]
    Feet,
}

impl ElevationUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            ElevationUnit::Meters => "m",
            ElevationUnit::Feet => "ft",
        }
    }
}

impl fmt::Display for ElevationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a kilometer distance for display.
///
/// Metric is the identity; imperial converts to statute miles.
pub fn convert_distance(km: f64, units: UnitSystem) -> (f64, DistanceUnit) {
    match units {
        UnitSystem::Metric => (km, DistanceUnit::Kilometers),
        UnitSystem::Imperial => (km * KM_TO_MILES, DistanceUnit::Miles),
    }
}

/// Converts an elevation given in feet for display.
pub fn convert_elevation(feet: i32, units: UnitSystem) -> (f64, ElevationUnit) {
    match units {
        UnitSystem::Metric => (f64::from(feet) * FEET_TO_METERS, ElevationUnit::Meters),
        UnitSystem::Imperial => (f64::from(feet), ElevationUnit::Feet),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zero_distance_for_identical_points() {
        let d = great_circle_distance_km(40.6398, -73.7789, 40.6398, -73.7789);
        assert!(d.abs() < 1e-9);
    }

    #[rstest]
    fn jfk_to_lax_is_about_3970_km() {
        let d = great_circle_distance_km(40.6398, -73.7789, 33.9416, -118.4085);
        assert!(d > 3900.0 && d < 4000.0, "got {d}");
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = great_circle_distance_km(51.4775, -0.4614, 43.6294, 1.3678);
        let b = great_circle_distance_km(43.6294, 1.3678, 51.4775, -0.4614);
        assert!((a - b).abs() < 1e-9);
    }

    #[rstest]
    fn nan_input_propagates() {
        assert!(great_circle_distance_km(f64::NAN, 0.0, 0.0, 0.0).is_nan());
    }

    #[rstest]
    #[case("metric", UnitSystem::Metric)]
    #[case("METRIC", UnitSystem::Metric)]
    #[case("m", UnitSystem::Metric)]
    #[case("Km", UnitSystem::Metric)]
    #[case("kilometers", UnitSystem::Metric)]
    #[case("imperial", UnitSystem::Imperial)]
    #[case("miles", UnitSystem::Imperial)]
    #[case("", UnitSystem::Imperial)]
    #[case("furlongs", UnitSystem::Imperial)]
    fn parse_normalizes_unit_parameter(#[case] raw: &str, #[case] expected: UnitSystem) {
        assert_eq!(UnitSystem::parse(raw), expected);
        assert_eq!(raw.parse::<UnitSystem>(), Ok(expected));
    }

    #[rstest]
    fn metric_distance_is_identity() {
        let (value, unit) = convert_distance(123.456, UnitSystem::Metric);
        assert_eq!(value, 123.456);
        assert_eq!(unit.as_str(), "km");
    }

    #[rstest]
    fn imperial_distance_converts_to_miles() {
        let (value, unit) = convert_distance(100.0, UnitSystem::Imperial);
        assert!((value / KM_TO_MILES - 100.0).abs() < 1e-9);
        assert_eq!(unit, DistanceUnit::Miles);
        assert_eq!(unit.to_string(), "mi");
    }

    #[rstest]
    #[case(UnitSystem::Metric, 3048.0, "m")]
    #[case(UnitSystem::Imperial, 10000.0, "ft")]
    fn elevation_conversion(#[case] units: UnitSystem, #[case] expected: f64, #[case] label: &str) {
        let (value, unit) = convert_elevation(10_000, units);
        assert!((value - expected).abs() < 1e-6);
        assert_eq!(unit.as_str(), label);
    }

    #[rstest]
    fn unit_labels_serialize_as_short_strings() {
        assert_eq!(serde_json::to_string(&DistanceUnit::Miles).unwrap(), "\"mi\"");
        assert_eq!(serde_json::to_string(&ElevationUnit::Meters).unwrap(), "\"m\"");
        assert_eq!(serde_json::to_string(&UnitSystem::Metric).unwrap(), "\"metric\"");
    }
}

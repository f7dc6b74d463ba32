//! Property-based tests for the query engine.
//!
//! # Invariants tested
//!
//! - **Lookup:** every primary code resolves to its own record; every
//!   alternate code resolves to a record carrying that alternate code.
//! - **Search:** no primary code appears twice; results are in name order.
//! - **Nearby:** results lie within the radius, nearest first, at most `limit`.
//! - **Pagination:** consecutive `all` pages rebuild the full listing.
//! - **Distance:** symmetric, non-negative, zero for identical points.
//! - **Units:** metric conversion is the identity; imperial scales by a
//!   constant factor.

use std::collections::{BTreeMap, HashSet};

use facdb_core::distance::{convert_distance, great_circle_distance_km, KM_TO_MILES};
use facdb_core::{Dataset, FacilitySearch, UnitSystem};
use proptest::prelude::*;
use serde_json::{json, Value};

const NAMES: &[&str] = &["Field", "Regional", "International", "Municipal", "Heliport", "Base"];
const PLACES: &[&str] = &["Springfield", "Riverside", "Fairview", "Salem", "Georgetown"];

fn entry_strategy() -> impl Strategy<Value = Value> {
    (
        "[A-Z]{3}",
        0..NAMES.len(),
        0..PLACES.len(),
        prop::sample::select(vec!["US", "CA", "GB", ""]),
        -80.0_f64..80.0,
        -179.0_f64..179.0,
        -100_i32..9000,
    )
        .prop_map(|(alt, name, place, country, lat, lon, elevation)| {
            json!({
                "iata": alt,
                "name": format!("{} {}", PLACES[place], NAMES[name]),
                "city": PLACES[place],
                "state": "",
                "country": country,
                "elevation": elevation,
                "lat": lat,
                "lon": lon,
                "tz": "",
            })
        })
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    prop::collection::btree_map("[A-Z0-9]{4}", entry_strategy(), 1..40).prop_map(
        |entries: BTreeMap<String, Value>| {
            let bytes = serde_json::to_vec(&entries).expect("json encodes");
            Dataset::from_snapshot(&bytes).expect("generated snapshot parses")
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_primary_code_resolves(db in dataset_strategy()) {
        for f in db.all(usize::MAX, 0) {
            prop_assert_eq!(db.get_by_code(&f.code).unwrap().code, f.code.clone());
            prop_assert_eq!(db.get_by_code(&f.code.to_lowercase()).unwrap().code, f.code);
        }
    }

    // Primary codes are four characters and alternate codes three, so an
    // alternate code never shadows a primary code here.
    #[test]
    fn every_alternate_code_resolves(db in dataset_strategy()) {
        for f in db.all(usize::MAX, 0) {
            let found = db.get_by_code(&f.alt_code.to_lowercase()).unwrap();
            prop_assert_eq!(found.alt_code, f.alt_code);
        }
    }

    #[test]
    fn search_has_no_duplicates_and_is_ordered(
        db in dataset_strategy(),
        query in prop::sample::select(vec!["field", "spring", "AL", "i", "base", "xyz", ""]),
    ) {
        let hits = db.search(query, usize::MAX, 0);

        let mut seen = HashSet::new();
        for f in &hits {
            prop_assert!(seen.insert(f.code.clone()), "duplicate {}", f.code);
        }
        for pair in hits.windows(2) {
            let a = (&pair[0].name, &pair[0].code);
            let b = (&pair[1].name, &pair[1].code);
            prop_assert!(a <= b);
        }
    }

    #[test]
    fn nearby_is_bounded_and_sorted(
        db in dataset_strategy(),
        lat in -80.0_f64..80.0,
        lon in -179.0_f64..179.0,
        radius in 0.0_f64..5000.0,
        limit in 0_usize..20,
    ) {
        let hits = db.nearby(lat, lon, radius, limit);
        prop_assert!(hits.len() <= limit);

        let distances: Vec<f64> = hits
            .iter()
            .map(|f| great_circle_distance_km(lat, lon, f.lat, f.lon))
            .collect();
        prop_assert!(distances.iter().all(|d| *d <= radius));
        prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn pages_rebuild_the_full_listing(db in dataset_strategy(), page in 1_usize..7) {
        let everything = db.all(usize::MAX, 0);
        let mut rebuilt = Vec::new();
        let mut offset = 0;
        loop {
            let chunk = db.all(page, offset);
            if chunk.is_empty() {
                break;
            }
            offset += chunk.len();
            rebuilt.extend(chunk);
        }
        prop_assert_eq!(rebuilt, everything);
    }

    #[test]
    fn distance_is_a_metric_on_points(
        a in (-90.0_f64..90.0, -180.0_f64..180.0),
        b in (-90.0_f64..90.0, -180.0_f64..180.0),
    ) {
        let ab = great_circle_distance_km(a.0, a.1, b.0, b.1);
        let ba = great_circle_distance_km(b.0, b.1, a.0, a.1);
        prop_assert!(ab >= 0.0);
        prop_assert!((ab - ba).abs() < 1e-6);
        prop_assert!(great_circle_distance_km(a.0, a.1, a.0, a.1).abs() < 1e-9);
    }

    #[test]
    fn metric_is_identity_and_imperial_scales(km in 0.0_f64..40_000.0) {
        let (metric, _) = convert_distance(km, UnitSystem::Metric);
        prop_assert_eq!(metric, km);
        prop_assert_eq!(convert_distance(metric, UnitSystem::Metric).0, km);

        let (miles, _) = convert_distance(km, UnitSystem::Imperial);
        prop_assert!((miles / KM_TO_MILES - km).abs() < 1e-6);
    }
}

//! Proximity queries with facdb-rs
//!
//! Shows radius search with distances in both unit systems, and bounding
//! box queries.

use facdb_rs::prelude::*;

fn main() -> Result<()> {
    let db = FacilityDb::load_from_path(facdb_rs::sample_snapshot_path())?;

    // Manhattan
    let (lat, lon) = (40.7128, -74.0060);

    println!("--- Within 30 km of Manhattan ---");
    for hit in db.nearby_with_distance(lat, lon, 30.0, 10, UnitSystem::Metric) {
        println!(
            "{:>7.2} {}  {} ({})",
            hit.distance, hit.distance_unit, hit.facility.code, hit.facility.name
        );
    }

    println!("\n--- Same query, imperial ---");
    for hit in db.nearby_with_distance(lat, lon, 30.0, 10, UnitSystem::parse("imperial")) {
        println!(
            "{:>7.2} {}  {}",
            hit.distance, hit.distance_unit, hit.facility.code
        );
    }

    println!("\n--- Closest two only ---");
    for f in db.nearby(lat, lon, 30.0, 2) {
        println!("{} {}", f.code, f.name);
    }

    println!("\n--- Bounding box over southern England ---");
    for f in db.in_bounding_box(50.5, 52.0, -1.5, 0.5) {
        println!("{} {}", f.code, f.name);
    }

    Ok(())
}

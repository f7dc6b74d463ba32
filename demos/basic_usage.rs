//! Basic usage example for facdb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled sample snapshot
//! - Look facilities up by primary and alternate code
//! - Run a text search with pagination
//! - Browse by country and region

use facdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== facdb-rs Basic Usage Example ===\n");

    // Load the database
    println!("Loading facility snapshot...");
    let db = FacilityDb::load_from_path(facdb_rs::sample_snapshot_path())?;
    println!("✓ Snapshot loaded successfully\n");

    // Example 1: Summary
    println!("--- Example 1: Catalog statistics ---");
    let stats = db.stats();
    println!("Facilities: {}", stats.total);
    println!("Countries: {}", stats.countries);
    println!("Localities: {}", stats.localities);
    println!("With alternate code: {}\n", stats.with_alternate_code);

    // Example 2: Lookup by code
    println!("--- Example 2: Lookup by primary or alternate code ---");
    for code in ["KJFK", "lhr", "cdg"] {
        let f = db.get_by_code(code)?;
        println!("{code:>5} -> {} ({}), {}", f.code, f.name, f.locality);
    }
    println!();

    // Example 3: Text search
    println!("--- Example 3: Search 'international', two per page ---");
    for page in 0..3 {
        let hits = db.search("international", 2, page * 2);
        println!("Page {}:", page + 1);
        for f in hits {
            println!("  {} {}", f.code, f.name);
        }
    }
    println!();

    // Example 4: Countries and regions
    println!("--- Example 4: Countries and US regions ---");
    for (country, count) in db.countries() {
        println!("{country}: {count}");
    }
    for (region, count) in db.regions_in_country("US") {
        println!("  {region}: {count}");
    }

    // Example 5: Elevation in both unit systems
    println!("\n--- Example 5: Elevation ---");
    let denver = db.get_by_code("DEN")?;
    for units in [UnitSystem::Imperial, UnitSystem::Metric] {
        let (value, unit) = denver.elevation(units);
        println!("{}: {value:.0} {unit}", denver.name);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}

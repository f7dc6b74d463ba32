//! Error handling example for facdb-rs
//!
//! This example demonstrates the failure modes of loading and querying.

use facdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== facdb-rs Error Handling Example ===\n");

    // Example 1: Missing file
    println!("--- Example 1: Loading a snapshot that does not exist ---");
    match FacilityDb::load_from_path("does/not/exist.json") {
        Ok(_) => println!("unexpectedly loaded"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: Malformed payload
    println!("--- Example 2: Malformed snapshot ---");
    match FacilityDb::from_snapshot(br#"["not", "an", "object"]"#) {
        Ok(_) => println!("unexpectedly loaded"),
        Err(FacDbError::Parse(e)) => println!("✗ parse error: {e}"),
        Err(e) => return Err(e),
    }
    println!();

    let db = FacilityDb::load_from_path(facdb_rs::sample_snapshot_path())?;

    // Example 3: Unknown codes
    println!("--- Example 3: Unknown codes ---");
    for code in ["ZZZZ", "", "XYZ"] {
        match db.get_by_code(code) {
            Ok(f) => println!("{code:?} -> {}", f.code),
            Err(e) if e.is_not_found() => println!("{code:?} -> not found"),
            Err(e) => return Err(e),
        }
    }
    println!();

    // Example 4: Short autocomplete queries
    println!("--- Example 4: Autocomplete needs two characters ---");
    for query in ["l", "lo"] {
        match db.suggest(query, 5) {
            Ok(hits) => println!("{query:?}: {} suggestions", hits.len()),
            Err(e) => println!("{query:?}: {e}"),
        }
    }
    println!();

    // Example 5: Empty results are not errors
    println!("--- Example 5: Empty results ---");
    println!("search 'atlantis': {}", db.search("atlantis", 10, 0).len());
    println!("nearby mid-Atlantic: {}", db.nearby(30.0, -40.0, 100.0, 10).len());
    println!("page past the end: {}", db.all(10, 1_000_000).len());
    println!("unknown country: {}", db.by_country("XX").len());

    Ok(())
}

// src/lib.rs

//! Umbrella crate for the demos: re-exports `facdb-core` under one name.

pub use facdb_core::*;

pub mod prelude {
    pub use facdb_core::prelude::*;
    pub use facdb_core::Result;
}

/// Bundled sample snapshot used by the demos.
pub fn sample_snapshot_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/airports.json")
}

// crates/facdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file access, decompression) and hands the
//! resulting byte stream to the snapshot parser.

use crate::catalog::Catalog;
use crate::db::FacilityDb;
use crate::error::{FacDbError, Result};
use crate::search::Dataset;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

impl FacilityDb {
    /// Loads a snapshot file and builds the database.
    ///
    /// Files ending in `.gz` are decompressed on the fly when the `compact`
    /// feature is enabled; anything else is read as plain JSON.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        // 1. Transport
        let reader = open_stream(path)?;
        // 2. Payload
        let catalog = Catalog::from_reader(reader)?;
        tracing::debug!(path = %path.display(), records = catalog.len(), "snapshot read");
        Ok(Self::from_dataset(Dataset::from_catalog(catalog)))
    }
}

// -----------------------------------------------------------------------
// INTERNAL TRANSPORT HELPER
// -----------------------------------------------------------------------

/// Opens a file, buffers it, and wraps it in a gzip decoder when the name
/// says it is compressed.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|source| FacDbError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        if is_gzip(path) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

#[cfg(feature = "compact")]
fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

// crates/facdb-core/src/lib.rs

//! # facdb-core
//!
//! In-memory catalog of physical facilities (airports), keyed by a primary
//! code and queryable by alternate code, text, proximity, bounding box and
//! administrative grouping.
//!
//! The catalog is loaded once from a JSON snapshot, indexed, and then served
//! read-only through [`FacilityDb`]:
//!
//! ```
//! use facdb_core::prelude::*;
//!
//! let db = FacilityDb::from_snapshot(br#"{
//!     "KJFK": {"iata": "JFK", "name": "John F Kennedy International Airport",
//!              "city": "New York", "state": "New-York", "country": "US",
//!              "elevation": 13, "lat": 40.6398, "lon": -73.7789,
//!              "tz": "America/New_York"}
//! }"#)?;
//!
//! assert_eq!(db.get_by_code("jfk")?.code, "KJFK");
//! assert_eq!(db.nearby(40.64, -73.78, 10.0, 5).len(), 1);
//! # Ok::<(), facdb_core::FacDbError>(())
//! ```

pub mod catalog;
pub mod common;
pub mod db;
pub mod distance;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod search;
pub mod text;
pub mod traits;
// Snapshot wire shapes, only used while loading.
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::catalog::Catalog;
pub use crate::common::DbStats;
pub use crate::db::FacilityDb;
pub use crate::distance::{DistanceUnit, ElevationUnit, UnitSystem};
pub use crate::error::{FacDbError, Result};
pub use crate::index::CatalogIndex;
pub use crate::model::{Facility, FacilityId, FacilityWithDistance};
pub use crate::search::Dataset;
// The query trait must be in scope to call any query.
pub use crate::traits::{FacilitySearch, MIN_SUGGEST_LEN};

pub mod prelude {
    pub use crate::{
        DbStats, Facility, FacilityDb, FacilitySearch, FacilityWithDistance, FacDbError,
        UnitSystem,
    };
}

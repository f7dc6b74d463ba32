// crates/facdb-core/src/error.rs

//! Typed failures surfaced by the catalog.
//!
//! Every query is a deterministic read over memory, so none of these errors
//! is retried internally: callers translate them into whatever their own
//! protocol needs.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FacDbError {
    /// The snapshot payload is not a JSON object of facility entries.
    #[error("failed to parse facility snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// No record matches the code, by primary or by alternate code.
    #[error("facility not found: {0}")]
    NotFound(String),

    /// The caller supplied input the engine refuses to answer.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Reading a snapshot from disk failed.
    #[error("failed to read snapshot at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FacDbError>;

impl FacDbError {
    /// `true` for the recoverable "no such record" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FacDbError::NotFound(_))
    }
}

// crates/facdb-core/src/text.rs

//! Key normalization shared by the index builder and the query engine.
//!
//! Codes and country keys are compared upper-cased, free text (names,
//! localities, regions) lower-cased. Matching is case-insensitive only; no
//! transliteration or typo tolerance is applied.

/// Normalized key for code-like fields (primary code, alternate code, country).
#[inline]
pub fn fold_code(s: &str) -> String {
    s.to_uppercase()
}

/// Normalized key for free-text fields (locality, region, search text).
#[inline]
pub fn fold_text(s: &str) -> String {
    s.to_lowercase()
}

// crates/facdb-cli/src/limits.rs

//! Clamping for user supplied paging and radius values.
//!
//! The core answers any limit it is given; these bounds keep interactive
//! output to a sensible size.

pub const DEFAULT_PAGE_LIMIT: usize = 50;
pub const MAX_PAGE_LIMIT: usize = 1000;

pub const DEFAULT_RADIUS_KM: f64 = 50.0;
pub const MAX_RADIUS_KM: f64 = 500.0;
pub const DEFAULT_NEARBY_LIMIT: usize = 20;

pub const DEFAULT_SUGGEST_LIMIT: usize = 10;
pub const MAX_SUGGEST_LIMIT: usize = 50;

/// Page size for `search` and `list`. Zero or anything above 1000 falls back
/// to the default of 50.
pub fn page_limit(requested: Option<usize>) -> usize {
    match requested {
        Some(n) if (1..=MAX_PAGE_LIMIT).contains(&n) => n,
        _ => DEFAULT_PAGE_LIMIT,
    }
}

/// Result count for `suggest`. Zero or anything above 50 falls back to the
/// default of 10.
pub fn suggest_limit(requested: Option<usize>) -> usize {
    match requested {
        Some(n) if (1..=MAX_SUGGEST_LIMIT).contains(&n) => n,
        _ => DEFAULT_SUGGEST_LIMIT,
    }
}

/// Result count for `nearby`; zero falls back to the default.
pub fn nearby_limit(requested: Option<usize>) -> usize {
    match requested {
        Some(0) | None => DEFAULT_NEARBY_LIMIT,
        Some(n) => n.min(MAX_PAGE_LIMIT),
    }
}

/// Radius for `nearby`: non-positive or non-finite values use the default,
/// anything larger than 500 km is capped.
pub fn radius_km(requested: Option<f64>) -> f64 {
    match requested {
        Some(r) if r.is_finite() && r > 0.0 => r.min(MAX_RADIUS_KM),
        _ => DEFAULT_RADIUS_KM,
    }
}

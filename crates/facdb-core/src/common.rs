// crates/facdb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the catalog.
///
/// Returned by [`FacilitySearch::stats`](crate::FacilitySearch::stats); every
/// count is derived from index bucket sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    /// Number of records in the catalog.
    pub total: usize,
    /// Distinct non-empty country codes.
    pub countries: usize,
    /// Distinct non-empty localities (case-insensitive).
    pub localities: usize,
    /// Distinct non-empty regions (case-insensitive).
    pub regions: usize,
    /// Records that carry a non-empty alternate code.
    pub with_alternate_code: usize,
}

/// Offset/limit window shared by every paginated query.
///
/// An offset at or past the end gives an empty page; otherwise the page runs
/// from `offset` to `min(offset + limit, len)`.
pub fn paginate<T>(items: &[T], limit: usize, offset: usize) -> &[T] {
    if offset >= items.len() {
        return &[];
    }
    let end = offset.saturating_add(limit).min(items.len());
    &items[offset..end]
}

#[cfg(test)]
mod tests {
    use super::paginate;
    use rstest::rstest;

    #[rstest]
    #[case(10, 0, &[0, 1, 2, 3, 4])]
    #[case(2, 0, &[0, 1])]
    #[case(2, 3, &[3, 4])]
    #[case(2, 4, &[4])]
    #[case(2, 5, &[])]
    #[case(0, 1, &[])]
    #[case(usize::MAX, 1, &[1, 2, 3, 4])]
    #[case(10, 1_000_000, &[])]
    fn windows(#[case] limit: usize, #[case] offset: usize, #[case] expected: &[i32]) {
        let items = [0, 1, 2, 3, 4];
        assert_eq!(paginate(&items, limit, offset), expected);
    }
}

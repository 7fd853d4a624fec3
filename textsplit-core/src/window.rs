//! Window construction
//!
//! Turns boundary offsets into a complete, gap-free, non-overlapping
//! partition of `[0, len)`.

use crate::{pairs::AdjacentPairsExt, types::SplitPoint};

/// Sort, dedup and drop boundaries outside the open interval `(0, len)`
pub fn normalize_boundaries(boundaries: &[usize], len: usize) -> Vec<usize> {
    let mut cleaned: Vec<usize> = boundaries
        .iter()
        .copied()
        .filter(|&offset| offset > 0 && offset < len)
        .collect();
    cleaned.sort_unstable();
    cleaned.dedup();
    cleaned
}

/// Build the non-overlapping windows for a document of `len` characters
///
/// `0` is prepended and `len` appended to the normalized boundaries; each
/// adjacent pair becomes one window. An empty document yields the single
/// window `[0, 0)`.
pub fn build_windows(boundaries: &[usize], len: usize) -> Vec<SplitPoint> {
    if len == 0 {
        return vec![SplitPoint::new(0, 0)];
    }

    let cleaned = normalize_boundaries(boundaries, len);
    std::iter::once(0)
        .chain(cleaned)
        .chain(std::iter::once(len))
        .adjacent_pairs()
        .filter(|(start, end)| start < end)
        .map(|(start, end)| SplitPoint::new(start, end))
        .collect()
}

//! # Worker task: upper-triangular scan of one partition range
//!
//! A worker owns a [`PartitionRange`] of outer indices. For every `i` in that
//! range it walks the inner index `j` over `(i, n)` and folds the separation of
//! `(stars[i], stars[j])` into a [`LocalStats`] it owns exclusively.
//!
//! Nothing in this module synchronises: the catalog is only read, the
//! accumulator is local. Handing the result to the reducer is the caller's job
//! (see [`SharedStats::merge`](crate::stats::SharedStats::merge)).
use crate::{catalog::StarRecord, partition::PartitionRange, stats::LocalStats};

/// Visit every pair owned by `range` and return the local statistics.
///
/// Arguments
/// -----------------
/// * `stars`: the whole catalog, borrowed read-only.
/// * `range`: outer indices owned by this worker; must lie within `0..=stars.len()`.
///
/// Return
/// ----------
/// * The [`LocalStats`] of the `range.pair_count(stars.len())` visited pairs.
///
/// See also
/// ------------
/// * [`scan_range_with`] – Same scan with a per-row callback (progress reporting).
pub fn scan_range(stars: &[StarRecord], range: PartitionRange) -> LocalStats {
    scan_range_with(stars, range, |_| {})
}

/// [`scan_range`] calling `on_row(pairs_in_row)` after each finished outer row.
pub fn scan_range_with<F>(
    stars: &[StarRecord],
    range: PartitionRange,
    mut on_row: F,
) -> LocalStats
where
    F: FnMut(u64),
{
    let mut local = LocalStats::new();

    for i in range.indices() {
        let anchor = &stars[i];
        let tail = &stars[i + 1..];
        for other in tail {
            local.fold(anchor.separation(other));
        }
        on_row(tail.len() as u64);
    }

    local
}

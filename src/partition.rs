//! # Work partitioning of the upper-triangular pair walk
//!
//! Splits the **outer** index range `[0, n)` of the pair enumeration into one
//! contiguous [`PartitionRange`] per worker. A worker that owns outer index `i`
//! visits every pair `(i, j)` with `i < j < n`, so a set of ranges that is
//! disjoint and exhaustive visits every unordered pair exactly once.
//!
//! ## Strategies
//! -----------------
//! Both strategies use the same width `w = n / workers` (integer division):
//!
//! ```text
//! range k = [k·w, k·w + w)          k = 0 .. workers-1
//! ```
//!
//! * [`PartitionStrategy::Legacy`] keeps these ranges as they are. When `workers`
//!   does not divide `n`, the tail `[workers·w, n)` belongs to nobody and those
//!   outer indices are never visited. This reproduces the historical behaviour
//!   bit for bit.
//! * [`PartitionStrategy::Balanced`] extends the last range to `n`, so the union
//!   of all ranges is exactly `[0, n)`.
//!
//! Outer rows do not cost the same (row `i` holds `n - i - 1` pairs), so neither
//! strategy balances the pair count; they balance the number of outer rows.
//!
//! ## Invariants
//! -----------------
//! * Ranges are returned in ascending order, are contiguous (`ranges[k].end == ranges[k+1].start`)
//!   and never overlap.
//! * `ranges.len() == workers`; when `workers > n` the leading ranges are empty.
use std::fmt;

use itertools::Itertools;

use crate::{
    constants::{StarIndex, MAX_WORKERS},
    StarSepError,
};

/// How the remainder of `n / workers` is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionStrategy {
    /// Last range absorbs the remainder; every outer index is covered.
    #[default]
    Balanced,
    /// Plain `n / workers` blocks; the remainder is dropped.
    Legacy,
}

/// Half-open block `[start, end)` of outer-loop indices owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartitionRange {
    pub start: StarIndex,
    pub end: StarIndex,
}

impl PartitionRange {
    pub fn new(start: StarIndex, end: StarIndex) -> Self {
        debug_assert!(start <= end, "inverted partition range {start}..{end}");
        Self { start, end }
    }

    /// Number of outer indices in the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn indices(&self) -> std::ops::Range<StarIndex> {
        self.start..self.end
    }

    /// Number of pairs `(i, j)`, `i < j < n`, visited by the owner of this range.
    ///
    /// Arguments
    /// -----------------
    /// * `n`: catalog length the range was computed for.
    ///
    /// Return
    /// ----------
    /// * `Σ_{i=start}^{end-1} (n - i - 1)`, computed in closed form.
    pub fn pair_count(&self, n: usize) -> u64 {
        if self.is_empty() {
            return 0;
        }
        // rows hold n-1-start, n-2-start, ..., n-end pairs
        let first = (n - 1 - self.start) as u64;
        let last = (n - self.end) as u64;
        (first + last) * self.len() as u64 / 2
    }
}

impl fmt::Display for PartitionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Compute one outer-index range per worker.
///
/// Arguments
/// -----------------
/// * `n`: number of records in the catalog.
/// * `workers`: number of workers, `1 ..= MAX_WORKERS`.
/// * `strategy`: remainder policy, see [`PartitionStrategy`].
///
/// Return
/// ----------
/// * `workers` ranges in ascending order, or [`StarSepError::InvalidWorkerCount`]
///   when `workers` is zero or above [`MAX_WORKERS`].
///
/// See also
/// ------------
/// * [`dropped_tail`] – Outer indices a set of ranges leaves out.
/// * [`pairs_for_ranges`] – Pair count actually visited by a set of ranges.
pub fn partition(
    n: usize,
    workers: usize,
    strategy: PartitionStrategy,
) -> Result<Vec<PartitionRange>, StarSepError> {
    if workers == 0 || workers > MAX_WORKERS {
        return Err(StarSepError::InvalidWorkerCount(workers));
    }

    let width = n / workers;
    let mut ranges: Vec<PartitionRange> = (0..workers)
        .map(|k| PartitionRange::new(k * width, k * width + width))
        .collect();

    if strategy == PartitionStrategy::Balanced {
        if let Some(last) = ranges.last_mut() {
            last.end = n;
        }
    }

    Ok(ranges)
}

/// Total number of outer indices covered by `ranges`.
pub fn covered_outer_indices(ranges: &[PartitionRange]) -> usize {
    ranges.iter().map(PartitionRange::len).sum()
}

/// Outer indices in `[0, n)` that `ranges` does not cover.
///
/// Assumes `ranges` comes from [`partition`] (ascending and contiguous from 0).
/// Empty for [`PartitionStrategy::Balanced`]; `[workers·w, n)` for
/// [`PartitionStrategy::Legacy`].
pub fn dropped_tail(n: usize, ranges: &[PartitionRange]) -> std::ops::Range<StarIndex> {
    let covered_end = ranges.last().map_or(0, |r| r.end);
    covered_end.min(n)..n
}

/// Number of pairs the owners of `ranges` will visit on a catalog of length `n`.
pub fn pairs_for_ranges(n: usize, ranges: &[PartitionRange]) -> u64 {
    ranges.iter().map(|r| r.pair_count(n)).sum()
}

/// Check that `ranges` is ascending, contiguous from 0, and exhaustive over `[0, n)`.
pub fn is_exhaustive(n: usize, ranges: &[PartitionRange]) -> bool {
    let starts_at_zero = ranges.first().is_some_and(|r| r.start == 0);
    let ends_at_n = ranges.last().is_some_and(|r| r.end == n);
    let contiguous = ranges
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.end == b.start);

    starts_at_zero && ends_at_n && contiguous
}

/// Number of unordered pairs `n·(n-1)/2` of a catalog of length `n`.
#[inline]
pub fn total_pairs(n: usize) -> u64 {
    let n = n as u64;
    n * n.saturating_sub(1) / 2
}

#[cfg(test)]
mod partition_test {
    use super::*;

    #[test]
    fn test_zero_and_too_many_workers_rejected() {
        assert_eq!(
            partition(10, 0, PartitionStrategy::Balanced),
            Err(StarSepError::InvalidWorkerCount(0))
        );
        assert_eq!(
            partition(10, MAX_WORKERS + 1, PartitionStrategy::Legacy),
            Err(StarSepError::InvalidWorkerCount(MAX_WORKERS + 1))
        );
    }

    #[test]
    fn test_even_split_is_identical_for_both_strategies() {
        for workers in [1, 2, 3, 4, 6, 12] {
            let legacy = partition(12, workers, PartitionStrategy::Legacy).unwrap();
            let balanced = partition(12, workers, PartitionStrategy::Balanced).unwrap();
            assert_eq!(legacy, balanced);
            assert_eq!(legacy.len(), workers);
            assert!(is_exhaustive(12, &legacy));
            assert!(legacy.iter().all(|r| r.len() == 12 / workers));
        }
    }

    #[test]
    fn test_legacy_drops_tail() {
        let ranges = partition(10, 3, PartitionStrategy::Legacy).unwrap();
        assert_eq!(
            ranges,
            vec![
                PartitionRange::new(0, 3),
                PartitionRange::new(3, 6),
                PartitionRange::new(6, 9)
            ]
        );
        assert_eq!(dropped_tail(10, &ranges), 9..10);
        assert_eq!(covered_outer_indices(&ranges), 9);
        assert!(!is_exhaustive(10, &ranges));
    }

    #[test]
    fn test_balanced_gives_remainder_to_last_worker() {
        let ranges = partition(10, 3, PartitionStrategy::Balanced).unwrap();
        assert_eq!(ranges[2], PartitionRange::new(6, 10));
        assert!(dropped_tail(10, &ranges).is_empty());
        assert!(is_exhaustive(10, &ranges));
    }

    #[test]
    fn test_more_workers_than_rows() {
        let legacy = partition(3, 5, PartitionStrategy::Legacy).unwrap();
        assert!(legacy.iter().all(PartitionRange::is_empty));
        assert_eq!(dropped_tail(3, &legacy), 0..3);
        assert_eq!(pairs_for_ranges(3, &legacy), 0);

        let balanced = partition(3, 5, PartitionStrategy::Balanced).unwrap();
        assert_eq!(balanced[4], PartitionRange::new(0, 3));
        assert!(is_exhaustive(3, &balanced));
        assert_eq!(pairs_for_ranges(3, &balanced), 3);
    }

    #[test]
    fn test_one_worker_per_row() {
        let ranges = partition(7, 7, PartitionStrategy::Legacy).unwrap();
        assert!(ranges.iter().all(|r| r.len() == 1));
        assert!(is_exhaustive(7, &ranges));
        assert_eq!(pairs_for_ranges(7, &ranges), total_pairs(7));
    }

    #[test]
    fn test_pair_count_closed_form() {
        let n = 23;
        for workers in 1..=n {
            for strategy in [PartitionStrategy::Legacy, PartitionStrategy::Balanced] {
                for r in partition(n, workers, strategy).unwrap() {
                    let brute: u64 = r.indices().map(|i| (n - i - 1) as u64).sum();
                    assert_eq!(r.pair_count(n), brute, "{r} with n={n}");
                }
            }
        }
    }

    #[test]
    fn test_balanced_always_covers_all_pairs() {
        for n in 0..40 {
            for workers in 1..12 {
                let ranges = partition(n, workers, PartitionStrategy::Balanced).unwrap();
                assert_eq!(pairs_for_ranges(n, &ranges), total_pairs(n));
            }
        }
    }

    #[test]
    fn test_total_pairs() {
        assert_eq!(total_pairs(0), 0);
        assert_eq!(total_pairs(1), 0);
        assert_eq!(total_pairs(4), 6);
        assert_eq!(total_pairs(30_000), 449_985_000);
    }
}

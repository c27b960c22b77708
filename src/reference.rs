//! # Sequential reference computation
//!
//! A single-threaded walk of the upper triangle, kept to validate the parallel
//! result of [`compute_separation_stats`](crate::separation::compute_separation_stats).
//! It shares no code with the partitioner, the worker, or the reducer, and keeps
//! a **running mean** (`mean += (d − mean) / count`) instead of a sum.
//!
//! The reference always visits every pair; compare it against
//! [`ComputeMode::Exact`](crate::separation::ComputeMode::Exact) runs.
use crate::{
    catalog::Catalog,
    constants::Degree,
    partition::total_pairs,
    separation::{ComputeMode, SeparationSummary},
    StarSepError,
};

/// Min / max / mean separation over all pairs, on the calling thread.
///
/// Arguments
/// -----------------
/// * `catalog`: the catalog to scan.
///
/// Return
/// ----------
/// * A [`SeparationSummary`] with `workers = 1` and `mode = Exact`; its `sum` is
///   reconstructed as `mean · pairs`.
/// * [`StarSepError::NotEnoughStars`] for fewer than two stars.
pub fn sequential_separation_stats(catalog: &Catalog) -> Result<SeparationSummary, StarSepError> {
    let n = catalog.len();
    if n < 2 {
        return Err(StarSepError::NotEnoughStars(n));
    }

    let stars = catalog.stars();
    let mut min = Degree::INFINITY;
    let mut max = Degree::NEG_INFINITY;
    let mut mean = 0.0;
    let mut count: u64 = 0;

    for (i, a) in stars.iter().enumerate() {
        for b in &stars[i + 1..] {
            let distance = a.separation(b);
            count += 1;
            min = min.min(distance);
            max = max.max(distance);
            mean += (distance - mean) / count as f64;
        }
    }

    debug_assert_eq!(count, total_pairs(n));

    Ok(SeparationSummary {
        mean,
        min: Some(min),
        max: Some(max),
        sum: mean * count as f64,
        pairs_visited: count,
        denominator: count,
        catalog_len: n,
        workers: 1,
        mode: ComputeMode::Exact,
    })
}

/// Largest absolute difference between the mean, min, and max of two summaries.
///
/// `None` if either summary has no min/max (nothing visited).
pub fn max_deviation(a: &SeparationSummary, b: &SeparationSummary) -> Option<Degree> {
    let d_min = (a.min? - b.min?).abs();
    let d_max = (a.max? - b.max?).abs();
    let d_mean = (a.mean - b.mean).abs();
    Some(d_min.max(d_max).max(d_mean))
}

#[cfg(test)]
mod reference_test {
    use super::*;
    use crate::catalog::StarRecord;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_stars() {
        let catalog = Catalog::from_records(vec![
            StarRecord::new(1, 0.0, 0.0),
            StarRecord::new(2, 0.0, 30.0),
        ]);
        let summary = sequential_separation_stats(&catalog).unwrap();
        assert_eq!(summary.pairs_visited, 1);
        assert_relative_eq!(summary.mean, 30.0, epsilon = 1e-9);
        assert_eq!(summary.min, summary.max);
    }

    #[test]
    fn test_not_enough_stars() {
        assert_eq!(
            sequential_separation_stats(&Catalog::default()),
            Err(StarSepError::NotEnoughStars(0))
        );
    }

    #[test]
    fn test_max_deviation() {
        let catalog = Catalog::from_text("1 0 0\n2 10 0\n3 0 10\n").unwrap();
        let a = sequential_separation_stats(&catalog).unwrap();
        assert_eq!(max_deviation(&a, &a), Some(0.0));

        let mut b = a.clone();
        b.max = b.max.map(|m| m + 0.5);
        assert_relative_eq!(max_deviation(&a, &b).unwrap(), 0.5, epsilon = 1e-12);

        b.min = None;
        assert_eq!(max_deviation(&a, &b), None);
    }
}

//! # Parallel pairwise separation statistics
//!
//! Entry point of the crate: [`compute_separation_stats`] walks every unordered
//! pair of a [`Catalog`] on a fixed pool of workers and returns the minimum,
//! maximum, and mean angular separation as a [`SeparationSummary`].
//!
//! ## Run phases
//! -----------------
//! ```text
//! Idle → Loading → Partitioning → Dispatching → WaitingForAll → Finalizing → Done
//! ```
//!
//! 1. **Loading** – done by the caller through
//!    [`Catalog::from_file`](crate::catalog::Catalog::from_file) before the run
//!    starts; [`compute_separation_stats`] leaves **Idle** with a loaded catalog.
//! 2. **Partitioning** – [`partition`] splits the outer indices into one
//!    range per worker.
//! 3. **Dispatching** – a `rayon` pool with exactly `workers` threads is built,
//!    and [`ThreadPool::broadcast`](rayon::ThreadPool::broadcast) runs the worker
//!    body once on each thread. Thread `k` scans range `k`; there is no task
//!    queue and no work stealing.
//!    Each worker folds its pairs into a private
//!    [`LocalStats`](crate::stats::LocalStats), then merges it **once** into the
//!    run's [`SharedStats`] (the only lock of the run).
//! 4. **WaitingForAll** – `broadcast` returns only when every worker is done.
//! 5. **Finalizing** – `mean = sum / denominator`.
//! 6. **Done** – the [`SeparationSummary`] is returned.
//!
//! Every transition is logged at `debug` level.
//!
//! ## Compute modes
//! -----------------
//! * [`ComputeMode::Exact`] (default) – balanced partitioning, every pair is
//!   visited, `denominator = n·(n−1)/2`.
//! * [`ComputeMode::Legacy`] – reproduces the historical program: plain
//!   `n / workers` blocks (the last `n mod workers` outer rows are skipped) and
//!   `denominator = n·(n+1)/2`.
//!
//! ## Examples
//! -----------------
//! ```rust
//! use starsep::catalog::Catalog;
//! use starsep::separation::{compute_separation_stats, SeparationParams};
//!
//! let catalog = Catalog::from_text("1 0 0\n2 10 0\n3 0 10\n4 10 10\n")?;
//! let params = SeparationParams::builder().workers(2).build()?;
//! let summary = compute_separation_stats(&catalog, &params)?;
//!
//! assert_eq!(summary.pairs_visited, 6);
//! println!("{summary}");
//! # Ok::<(), starsep::StarSepError>(())
//! ```
use std::{fmt, time::Instant};

use rayon::ThreadPoolBuilder;

use crate::{
    catalog::Catalog,
    constants::{Degree, MAX_WORKERS},
    partition::{dropped_tail, pairs_for_ranges, partition, total_pairs, PartitionStrategy},
    progress::{fmt_dur, PairProgress},
    stats::SharedStats,
    worker::scan_range_with,
    StarSepError,
};

/// Selects partitioning and mean denominator together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComputeMode {
    /// Every pair visited, mean over `n·(n−1)/2` pairs.
    #[default]
    Exact,
    /// Historical behaviour: tail rows dropped, mean over `n·(n+1)/2`.
    Legacy,
}

impl ComputeMode {
    pub fn partition_strategy(self) -> PartitionStrategy {
        match self {
            ComputeMode::Exact => PartitionStrategy::Balanced,
            ComputeMode::Legacy => PartitionStrategy::Legacy,
        }
    }

    /// Number the accumulated sum is divided by for a catalog of length `n`.
    pub fn mean_denominator(self, n: usize) -> u64 {
        match self {
            ComputeMode::Exact => total_pairs(n),
            ComputeMode::Legacy => {
                let n = n as u64;
                n * (n + 1) / 2
            }
        }
    }
}

impl fmt::Display for ComputeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputeMode::Exact => write!(f, "exact"),
            ComputeMode::Legacy => write!(f, "legacy"),
        }
    }
}

/// Configuration of one run.
///
/// Defaults
/// -----------------
/// * `workers`: 1
/// * `mode`: [`ComputeMode::Exact`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparationParams {
    /// Number of parallel workers, `1 ..= MAX_WORKERS`.
    pub workers: usize,
    pub mode: ComputeMode,
}

impl Default for SeparationParams {
    fn default() -> Self {
        SeparationParams {
            workers: 1,
            mode: ComputeMode::Exact,
        }
    }
}

impl SeparationParams {
    /// Construct a new [`SeparationParams`] with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`SeparationParamsBuilder`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use starsep::separation::{ComputeMode, SeparationParams};
    ///
    /// let params = SeparationParams::builder()
    ///     .workers(8)
    ///     .mode(ComputeMode::Legacy)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(params.workers, 8);
    /// ```
    pub fn builder() -> SeparationParamsBuilder {
        SeparationParamsBuilder::new()
    }
}

/// Builder for [`SeparationParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct SeparationParamsBuilder {
    params: SeparationParams,
}

impl SeparationParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: SeparationParams::default(),
        }
    }

    pub fn workers(mut self, v: usize) -> Self {
        self.params.workers = v;
        self
    }

    pub fn mode(mut self, v: ComputeMode) -> Self {
        self.params.mode = v;
        self
    }

    /// Shorthand for `mode(ComputeMode::Legacy)` / `mode(ComputeMode::Exact)`.
    pub fn legacy(self, legacy: bool) -> Self {
        self.mode(if legacy {
            ComputeMode::Legacy
        } else {
            ComputeMode::Exact
        })
    }

    /// Finalize the builder.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(SeparationParams)` if `1 ≤ workers ≤ MAX_WORKERS`.
    /// * `Err(StarSepError::InvalidWorkerCount)` otherwise.
    pub fn build(self) -> Result<SeparationParams, StarSepError> {
        let p = self.params;
        if p.workers == 0 || p.workers > MAX_WORKERS {
            return Err(StarSepError::InvalidWorkerCount(p.workers));
        }
        Ok(p)
    }
}

/// Result of one run.
///
/// Fields
/// -----------------
/// * `mean` – accumulated sum divided by `denominator`.
/// * `min` / `max` – extreme separations, `None` if no pair was visited
///   (possible in legacy mode when `workers > n`).
/// * `sum` – raw sum of all visited separations.
/// * `pairs_visited` – pairs actually walked by the workers.
/// * `denominator` – divisor of the mean, see [`ComputeMode::mean_denominator`].
/// * `catalog_len`, `workers`, `mode` – run configuration.
///
/// Display
/// -----------------
/// * `format!("{}", summary)` – compact single-line summary.
/// * `format!("{:#}", summary)` – multi-line table.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparationSummary {
    pub mean: Degree,
    pub min: Option<Degree>,
    pub max: Option<Degree>,
    pub sum: Degree,
    pub pairs_visited: u64,
    pub denominator: u64,
    pub catalog_len: usize,
    pub workers: usize,
    pub mode: ComputeMode,
}

impl SeparationSummary {
    /// Pairs of the catalog that no worker visited (the legacy tail).
    pub fn pairs_skipped(&self) -> u64 {
        total_pairs(self.catalog_len) - self.pairs_visited
    }
}

fn fmt_opt(v: Option<Degree>) -> String {
    v.map_or_else(|| "n/a".to_string(), |v| format!("{v:.6}"))
}

impl fmt::Display for SeparationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Angular separation ({} mode) - summary", self.mode)?;
            writeln!(f, "--------------------------------------")?;
            writeln!(f, "stars   : {}", self.catalog_len)?;
            writeln!(f, "workers : {}", self.workers)?;
            writeln!(f, "pairs   : {}/{}", self.pairs_visited, self.denominator)?;
            writeln!(f, "mean    : {:.6}", self.mean)?;
            writeln!(f, "min     : {}", fmt_opt(self.min))?;
            write!(f, "max     : {}", fmt_opt(self.max))
        } else {
            write!(
                f,
                "mean={:.6}, min={}, max={}, pairs={}",
                self.mean,
                fmt_opt(self.min),
                fmt_opt(self.max),
                self.pairs_visited
            )
        }
    }
}

/// Compute min / max / mean angular separation over all pairs of `catalog`.
///
/// Arguments
/// -----------------
/// * `catalog`: loaded catalog, borrowed read-only by every worker.
/// * `params`: worker count and compute mode.
///
/// Return
/// ----------
/// * A [`SeparationSummary`] once every worker has merged.
/// * [`StarSepError::NotEnoughStars`] for catalogs with fewer than two stars,
///   [`StarSepError::InvalidWorkerCount`] for an out-of-range worker count, or
///   [`StarSepError::ThreadPoolError`] if the pool cannot be created.
///
/// Panics
/// ----------
/// * A panicking worker propagates its panic to the caller; no partial summary
///   is ever produced.
///
/// See also
/// ------------
/// * [`reference::sequential_separation_stats`](crate::reference::sequential_separation_stats) – Single-threaded reference.
/// * [`partition`] – Range computation.
pub fn compute_separation_stats(
    catalog: &Catalog,
    params: &SeparationParams,
) -> Result<SeparationSummary, StarSepError> {
    let n = catalog.len();
    if n < 2 {
        return Err(StarSepError::NotEnoughStars(n));
    }

    let started = Instant::now();
    tracing::debug!("loading -> partitioning: catalog of {n} stars");
    tracing::info!(
        "computing separations of {n} stars with {} workers ({} mode)",
        params.workers,
        params.mode
    );

    let ranges = partition(n, params.workers, params.mode.partition_strategy())?;
    let skipped = dropped_tail(n, &ranges);
    if !skipped.is_empty() {
        tracing::warn!(
            "outer rows {}..{} are not assigned to any worker and will be skipped",
            skipped.start,
            skipped.end
        );
    }

    tracing::debug!("partitioning -> dispatching {} workers", ranges.len());
    let pool = ThreadPoolBuilder::new()
        .num_threads(ranges.len())
        .thread_name(|i| format!("starsep-worker-{i}"))
        .build()?;

    let shared = SharedStats::new();
    let progress = PairProgress::new(pairs_for_ranges(n, &ranges));
    let stars = catalog.stars();

    tracing::debug!("dispatching -> waiting for all workers");
    pool.broadcast(|ctx| {
        let range = ranges[ctx.index()];
        let local = scan_range_with(stars, range, |pairs| progress.advance(pairs));
        shared.merge(&local);
        tracing::debug!(
            "worker {} merged {} pairs from rows {range}",
            ctx.index(),
            local.pairs
        );
    });
    progress.finish();
    tracing::debug!("waiting for all -> finalizing: every worker joined");

    let totals = shared.into_inner();
    let denominator = params.mode.mean_denominator(n);
    let summary = SeparationSummary {
        mean: totals.sum / denominator as f64,
        min: totals.min(),
        max: totals.max(),
        sum: totals.sum,
        pairs_visited: totals.pairs,
        denominator,
        catalog_len: n,
        workers: params.workers,
        mode: params.mode,
    };

    tracing::debug!("finalizing -> done");
    tracing::info!("{summary} in {}", fmt_dur(started.elapsed()));
    Ok(summary)
}

#[cfg(test)]
mod separation_test {
    use super::*;
    use crate::catalog::StarRecord;
    use approx::assert_relative_eq;

    fn square() -> Catalog {
        Catalog::from_records(vec![
            StarRecord::new(1, 0.0, 0.0),
            StarRecord::new(2, 10.0, 0.0),
            StarRecord::new(3, 0.0, 10.0),
            StarRecord::new(4, 10.0, 10.0),
        ])
    }

    #[test]
    fn test_builder_validation() {
        assert_eq!(
            SeparationParams::builder().workers(0).build(),
            Err(StarSepError::InvalidWorkerCount(0))
        );
        assert_eq!(
            SeparationParams::builder().workers(MAX_WORKERS + 1).build(),
            Err(StarSepError::InvalidWorkerCount(MAX_WORKERS + 1))
        );
        let p = SeparationParams::builder()
            .workers(3)
            .legacy(true)
            .build()
            .unwrap();
        assert_eq!(p.workers, 3);
        assert_eq!(p.mode, ComputeMode::Legacy);
        assert_eq!(SeparationParams::new(), SeparationParams::default());
    }

    #[test]
    fn test_denominators() {
        assert_eq!(ComputeMode::Exact.mean_denominator(4), 6);
        assert_eq!(ComputeMode::Legacy.mean_denominator(4), 10);
        assert_eq!(ComputeMode::Legacy.mean_denominator(30_000), 450_015_000);
    }

    #[test]
    fn test_not_enough_stars() {
        let params = SeparationParams::default();
        assert_eq!(
            compute_separation_stats(&Catalog::default(), &params),
            Err(StarSepError::NotEnoughStars(0))
        );
        let one = Catalog::from_records(vec![StarRecord::new(1, 0.0, 0.0)]);
        assert_eq!(
            compute_separation_stats(&one, &params),
            Err(StarSepError::NotEnoughStars(1))
        );
    }

    #[test]
    fn test_square_exact_and_legacy() {
        let catalog = square();
        let exact = compute_separation_stats(&catalog, &SeparationParams::default()).unwrap();
        let legacy = compute_separation_stats(
            &catalog,
            &SeparationParams::builder().legacy(true).build().unwrap(),
        )
        .unwrap();

        assert_eq!(exact.pairs_visited, 6);
        assert_eq!(legacy.pairs_visited, 6);
        assert_eq!(exact.denominator, 6);
        assert_eq!(legacy.denominator, 10);
        assert_eq!(exact.sum, legacy.sum);
        assert_relative_eq!(exact.mean * 6.0, legacy.mean * 10.0, epsilon = 1e-12);
        assert_eq!(exact.min, legacy.min);
        assert_eq!(exact.max, legacy.max);
        assert_eq!(exact.pairs_skipped(), 0);
    }

    #[test]
    fn test_legacy_with_more_workers_than_stars() {
        let summary = compute_separation_stats(
            &square(),
            &SeparationParams::builder()
                .workers(5)
                .mode(ComputeMode::Legacy)
                .build()
                .unwrap(),
        )
        .unwrap();
        assert_eq!(summary.pairs_visited, 0);
        assert_eq!(summary.min, None);
        assert_eq!(summary.max, None);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.pairs_skipped(), 6);
        assert_eq!(
            format!("{summary}"),
            "mean=0.000000, min=n/a, max=n/a, pairs=0"
        );
    }

    #[test]
    fn test_display_alternate() {
        let summary = compute_separation_stats(&square(), &SeparationParams::default()).unwrap();
        let text = format!("{summary:#}");
        assert!(text.starts_with("Angular separation (exact mode) - summary"));
        assert!(text.contains("pairs   : 6/6"));
        assert!(text.contains("workers : 1"));
    }
}

//! # Local and shared separation statistics
//!
//! Two levels of accumulation are used during a run:
//!
//! * [`LocalStats`] – private to one worker, updated without any synchronisation
//!   for every pair the worker visits.
//! * [`SharedStats`] – one per run, owned by the orchestrator and borrowed by every
//!   worker. Workers fold their finished [`LocalStats`] into it exactly once, under a
//!   mutex; nothing else ever touches it while workers are alive.
//!
//! ## Reduction
//! -----------------
//! `min`/`max` are associative and commutative, and `sum`/`pairs` are plain additions,
//! so the merge order does not change `min`, `max`, or `pairs`. The `sum` is subject to
//! the usual floating-point reordering error only.
//!
//! The identity element is `min = +∞`, `max = −∞`, `sum = 0`, `pairs = 0`: merging an
//! empty worker (an empty partition range) is a no-op.
use parking_lot::Mutex;

use crate::constants::Degree;

/// Running min / max / sum of visited separations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalStats {
    pub min: Degree,
    pub max: Degree,
    pub sum: Degree,
    pub pairs: u64,
}

impl Default for LocalStats {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStats {
    /// Empty accumulator (identity of [`LocalStats::merge`]).
    pub const fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            pairs: 0,
        }
    }

    /// Account for one more visited pair.
    #[inline]
    pub fn fold(&mut self, distance: Degree) {
        if distance < self.min {
            self.min = distance;
        }
        if distance > self.max {
            self.max = distance;
        }
        self.sum += distance;
        self.pairs += 1;
    }

    /// Combine another accumulator into this one.
    #[inline]
    pub fn merge(&mut self, other: &LocalStats) {
        if other.min < self.min {
            self.min = other.min;
        }
        if other.max > self.max {
            self.max = other.max;
        }
        self.sum += other.sum;
        self.pairs += other.pairs;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs == 0
    }

    /// Smallest visited separation, `None` if nothing was visited.
    pub fn min(&self) -> Option<Degree> {
        (!self.is_empty()).then_some(self.min)
    }

    /// Largest visited separation, `None` if nothing was visited.
    pub fn max(&self) -> Option<Degree> {
        (!self.is_empty()).then_some(self.max)
    }
}

impl FromIterator<Degree> for LocalStats {
    fn from_iter<T: IntoIterator<Item = Degree>>(iter: T) -> Self {
        let mut stats = LocalStats::new();
        for distance in iter {
            stats.fold(distance);
        }
        stats
    }
}

/// Global statistics of one run, shared by reference with all workers.
#[derive(Debug, Default)]
pub struct SharedStats {
    inner: Mutex<LocalStats>,
}

impl SharedStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished worker's statistics into the global state.
    ///
    /// The lock is held only for the comparisons and additions of
    /// [`LocalStats::merge`]; callers must finish every distance computation first.
    pub fn merge(&self, local: &LocalStats) {
        self.inner.lock().merge(local);
    }

    /// Consume the shared state once every worker has merged.
    pub fn into_inner(self) -> LocalStats {
        self.inner.into_inner()
    }
}

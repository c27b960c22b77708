//! Lightweight timing and progress utilities.
//!
//! Components
//! -----------------
//! * [`fmt_dur`] – Human-readable formatter for [`Duration`] values,
//!   producing strings like `"253µs"`, `"42ms"`, or `"3.14s"` depending
//!   on the scale. Used to log how long a run took.
//!
//! * [`PairProgress`] – Shared progress counter over the total number of
//!   pairs of a run. With the `progress` feature it drives an `indicatif`
//!   bar; without it every call compiles to nothing.
//!
//! Design notes
//! -----------------
//! * Workers advance the bar once per finished outer row, never per pair, so
//!   the bar costs one atomic update per row.
//! * The bar is cleared when the run finishes; results are printed by the caller.
use std::time::Duration;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

#[inline]
pub fn fmt_dur(d: Duration) -> String {
    let us = d.as_micros();
    if us < 1_000 {
        format!("{us}µs")
    } else {
        let ms = d.as_millis();
        if ms < 1_000 {
            format!("{ms}ms")
        } else {
            let s = d.as_secs_f32();
            format!("{s:.2}s")
        }
    }
}

/// Progress over the pairs of one run, shareable by reference between workers.
#[derive(Debug, Clone)]
pub struct PairProgress {
    #[cfg(feature = "progress")]
    bar: ProgressBar,
}

impl PairProgress {
    #[cfg(feature = "progress")]
    pub fn new(total_pairs: u64) -> Self {
        let bar = ProgressBar::new(total_pairs.max(1));
        match ProgressStyle::with_template(
            "{bar:40.cyan/blue} {pos}/{len} pairs ({percent:>3}%) | {per_sec} | ETA {eta_precise}",
        ) {
            Ok(style) => bar.set_style(style),
            Err(err) => tracing::warn!("progress template rejected: {err}"),
        }
        bar.enable_steady_tick(Duration::from_millis(200));
        Self { bar }
    }

    #[cfg(not(feature = "progress"))]
    pub fn new(_total_pairs: u64) -> Self {
        Self {}
    }

    #[inline]
    pub fn advance(&self, _pairs: u64) {
        #[cfg(feature = "progress")]
        self.bar.inc(_pairs);
    }

    pub fn finish(&self) {
        #[cfg(feature = "progress")]
        {
            self.bar.disable_steady_tick();
            self.bar.finish_and_clear();
        }
    }
}

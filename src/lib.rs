//! # starsep
//!
//! Pairwise angular separation statistics (minimum, maximum, mean) over a star
//! catalog, with the O(n²) pair walk split across a fixed pool of workers.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angular_distance`] | Great-circle separation of two RA/Dec directions |
//! | [`catalog`] | [`Catalog`], [`StarRecord`], text catalog reader |
//! | [`partition`] | Outer-index ranges per worker ([`partition::partition`]) |
//! | [`worker`] | Upper-triangular scan of one range |
//! | [`stats`] | Local accumulators and the mutex-guarded shared state |
//! | [`separation`] | Orchestrator: [`compute_separation_stats`], [`SeparationParams`] |
//! | [`reference`] | Sequential reference used for validation |
//!
//! Feature flags
//! -----------------
//! * `progress` — live `indicatif` progress bar over the pairs of a run.
pub mod angular_distance;
pub mod catalog;
pub mod constants;
pub mod partition;
pub mod progress;
pub mod reference;
pub mod separation;
pub mod starsep_errors;
pub mod stats;
pub mod worker;

pub use crate::catalog::{Catalog, StarRecord};
pub use crate::separation::{
    compute_separation_stats, ComputeMode, SeparationParams, SeparationSummary,
};
pub use crate::starsep_errors::StarSepError;

//! # Constants and type definitions for starsep
//!
//! This module centralizes the **unit conversions**, **limits**, and **common type
//! aliases** used throughout the `starsep` library.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians)
//! - Core type aliases used across the crate
//! - Default locations and limits used by the catalog loader and the orchestrator

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Radians → degrees
pub const DEGRAD: f64 = 180.0 / std::f64::consts::PI;

/// Largest possible angular separation on the sphere, in degrees
pub const MAX_SEPARATION: Degree = 180.0;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-9;

// -------------------------------------------------------------------------------------------------
// Limits and defaults
// -------------------------------------------------------------------------------------------------

/// Catalog read when no path is given on the command line
pub const DEFAULT_CATALOG_PATH: &str = "data/tycho-trimmed.csv";

/// Number of whitespace-separated fields in a catalog line (`id ra dec`)
pub const CATALOG_COLUMNS: usize = 3;

/// Upper bound on the number of workers of a single run
pub const MAX_WORKERS: usize = 1000;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Identifier of a star as written in the catalog file
pub type StarId = i64;
/// Index of a star inside a loaded [`Catalog`](crate::catalog::Catalog)
pub type StarIndex = usize;

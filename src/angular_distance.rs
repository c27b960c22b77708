//! # Angular separation on the celestial sphere
//!
//! Great-circle distance between two equatorial directions given as
//! right ascension / declination pairs in **degrees**.
//!
//! The separation is computed with the spherical law of cosines:
//!
//! ```text
//! cos θ = sin δ₁ · sin δ₂ + cos δ₁ · cos δ₂ · cos(α₁ − α₂)
//! ```
//!
//! Rounding can push the right-hand side slightly outside `[-1, 1]` for
//! (nearly) identical or antipodal directions, so the cosine is always clamped
//! before the inverse cosine. Without the clamp `acos` returns `NaN`.

use crate::constants::{Degree, Radian, DEGRAD, RADEG};

/// Angular separation between two directions, in degrees.
///
/// Arguments
/// -----------------
/// * `ra1`, `dec1`: right ascension and declination of the first direction (degrees).
/// * `ra2`, `dec2`: right ascension and declination of the second direction (degrees).
///
/// Return
/// ----------
/// * The separation in degrees, always in `[0, 180]`.
///
/// See also
/// ------------
/// * [`StarRecord::separation`](crate::catalog::StarRecord::separation) – Same computation on catalog records.
#[inline]
pub fn angular_distance(ra1: Degree, dec1: Degree, ra2: Degree, dec2: Degree) -> Degree {
    let cos_sep = separation_cosine(ra1 * RADEG, dec1 * RADEG, ra2 * RADEG, dec2 * RADEG);
    cos_sep.clamp(-1.0, 1.0).acos() * DEGRAD
}

/// Unclamped cosine of the separation for angles already in radians.
#[inline]
fn separation_cosine(ra1: Radian, dec1: Radian, ra2: Radian, dec2: Radian) -> f64 {
    let (sin_dec1, cos_dec1) = dec1.sin_cos();
    let (sin_dec2, cos_dec2) = dec2.sin_cos();
    sin_dec1 * sin_dec2 + cos_dec1 * cos_dec2 * (ra1 - ra2).cos()
}

use std::fmt;

use crate::{
    angular_distance::angular_distance,
    constants::{Degree, StarId},
};

/// One catalog entry: an identifier and an equatorial direction.
///
/// Fields
/// -----------------
/// * `id` – identifier as written in the catalog file (not used for indexing).
/// * `right_ascension` – right ascension, in degrees.
/// * `declination` – declination, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRecord {
    pub id: StarId,
    pub right_ascension: Degree,
    pub declination: Degree,
}

impl StarRecord {
    pub fn new(id: StarId, right_ascension: Degree, declination: Degree) -> Self {
        Self {
            id,
            right_ascension,
            declination,
        }
    }

    /// Angular separation to another record, in degrees.
    ///
    /// See also
    /// ------------
    /// * [`angular_distance`] – The underlying spherical law of cosines.
    #[inline]
    pub fn separation(&self, other: &StarRecord) -> Degree {
        angular_distance(
            self.right_ascension,
            self.declination,
            other.right_ascension,
            other.declination,
        )
    }
}

impl fmt::Display for StarRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} (ra={:.6}°, dec={:.6}°)",
            self.id, self.right_ascension, self.declination
        )
    }
}

#[cfg(test)]
mod star_record_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_separation_matches_free_function() {
        let a = StarRecord::new(1, 10.0, 20.0);
        let b = StarRecord::new(2, 45.0, -5.0);
        assert_eq!(a.separation(&b), angular_distance(10.0, 20.0, 45.0, -5.0));
        assert_abs_diff_eq!(a.separation(&a), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_display() {
        let s = StarRecord::new(42, 1.5, -2.25);
        assert_eq!(format!("{s}"), "#42 (ra=1.500000°, dec=-2.250000°)");
    }
}

#![allow(dead_code)]

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use starsep::{Catalog, SeparationSummary, StarRecord};

/// Random catalog spread uniformly over the sphere, reproducible from `seed`.
pub fn random_catalog(n: usize, seed: u64) -> Catalog {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let ra = rng.random_range(0.0..360.0);
            // uniform in sin(dec) so the poles are not oversampled
            let dec = rng.random_range(-1.0f64..=1.0).asin().to_degrees();
            StarRecord::new(i as i64 + 1, ra, dec)
        })
        .collect()
}

/// The 4-star square at (0,0), (10,0), (0,10), (10,10) degrees.
pub fn square_catalog() -> Catalog {
    Catalog::from_text("1 0 0\n2 10 0\n3 0 10\n4 10 10\n").unwrap()
}

pub fn assert_summary_close(
    actual: &SeparationSummary,
    expected: &SeparationSummary,
    epsilon: f64,
) {
    assert_eq!(actual.pairs_visited, expected.pairs_visited);
    assert_relative_eq!(actual.mean, expected.mean, epsilon = epsilon);
    assert_relative_eq!(
        actual.min.unwrap(),
        expected.min.unwrap(),
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.max.unwrap(),
        expected.max.unwrap(),
        epsilon = epsilon
    );
}

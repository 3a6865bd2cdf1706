use crate::point::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Coordinates are drawn from `[0, COORD_LIMIT)`.
pub const COORD_LIMIT: i32 = 100;

/// Generate `count` points from a seeded generator.
///
/// The generator is constructed locally from the seed, so the same
/// `(count, seed)` always produces the identical sequence. `count = 0`
/// yields an empty set.
pub fn generate(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Point::new(
                rng.random_range(0..COORD_LIMIT),
                rng.random_range(0..COORD_LIMIT),
            )
        })
        .collect()
}

use crate::partition::Segment;
use crate::point::{distance, Point};
use serde::{Deserialize, Serialize};

/// A candidate or final closest pair: indices of the two endpoints in the
/// generated sequence, plus their distance. `a != b` always holds by index,
/// even when the coordinates coincide.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

impl Pair {
    /// Resolve the endpoint indices against the point set they index into.
    pub fn endpoints(&self, points: &[Point]) -> (Point, Point) {
        (points[self.a], points[self.b])
    }
}

/// The best pair found by a single worker, or `None` when its segment
/// admits no valid pair (segment of size zero).
pub type PartialResult = Option<Pair>;

/// Exhaustive closest-pair scan of one segment against the full point set.
///
/// Every index in `segment` is compared with every index of `points`,
/// skipping only the self-pair (same index, never merely equal coordinates).
/// Strict `<` keeps the first pair reaching the minimum in scan order, so
/// ties resolve to the earliest candidate. `O(|segment| * n)` by design:
/// the brute force is the workload being parallelized, not optimized.
pub fn closest_pair(segment: Segment, points: &[Point]) -> PartialResult {
    let mut best: PartialResult = None;

    for a in segment.start..segment.end.min(points.len()) {
        for b in 0..points.len() {
            if a == b {
                continue;
            }
            let d = distance(points[a], points[b]);
            if best.is_none_or(|p| d < p.distance) {
                best = Some(Pair { a, b, distance: d });
            }
        }
    }

    best
}

/// Single-threaded scan of the whole set, the reference every concurrency
/// strategy must agree with.
pub fn closest_pair_full(points: &[Point]) -> PartialResult {
    closest_pair(Segment::new(0, points.len()), points)
}

use serde::{Deserialize, Serialize};

/// A 2-D point with integer coordinates.
///
/// Equality is value equality on the coordinates. Two generated points may
/// coincide in coordinates and still be distinct entities; identity is the
/// point's index in the generated sequence, never its coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Euclidean distance between two points.
///
/// Symmetric, and zero exactly when the coordinates coincide.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

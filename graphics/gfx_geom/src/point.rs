//! 3D points.

use std::fmt;

/// A point in 3D space.
///
/// Layout: 24 bytes (three `f64` coordinates). The z coordinate takes part in
/// squared distance but is ignored by rectangle containment.
#[derive(Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

crate::static_assert_size!(Point, 24);

impl Point {
    /// The origin `(0, 0, 0)`.
    pub const ORIGIN: Point = Point::new(0.0, 0.0, 0.0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }

    /// Squared distance to `other`. See [`crate::distance_squared`].
    #[inline]
    pub fn distance_squared(self, other: Point) -> f64 {
        crate::distance_squared(self, other)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point::new(x, y, z)
    }
}

#[cfg(test)]
mod tests;

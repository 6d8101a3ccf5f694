//! Geometry formulas over points and shapes.
//!
//! # Squared Distance
//!
//! [`distance_squared`] never takes a square root. [`point_in_circle`]
//! compares it against `radius²`, so containment is exact without the root.
//! Callers that want a Euclidean distance must take `sqrt` themselves.

use crate::{Circle, Point, Rectangle};

/// Fixed multiplier used for circle area.
///
/// Five-digit approximation of π; reports print areas computed with this
/// value (r = 25 gives `1963.49`).
#[allow(
    clippy::approx_constant,
    reason = "area formula uses the fixed five-digit multiplier, not f64::consts::PI"
)]
pub const AREA_MULTIPLIER: f64 = 3.14159;

/// Sum of squared coordinate differences between `a` and `b`.
#[inline]
pub fn distance_squared(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    dx * dx + dy * dy + dz * dz
}

/// Absolute width times absolute height, from the corner difference.
#[inline]
pub fn rectangle_area(rect: &Rectangle) -> f64 {
    let width = (rect.bottom_right.x - rect.top_left.x).abs();
    let height = (rect.bottom_right.y - rect.top_left.y).abs();
    width * height
}

/// `AREA_MULTIPLIER × radius²`.
#[inline]
pub fn circle_area(circle: &Circle) -> f64 {
    AREA_MULTIPLIER * circle.radius * circle.radius
}

/// Whether `p` lies within the rectangle's x/y bounds, edges inclusive.
///
/// The z coordinate is ignored.
pub fn point_in_rectangle(p: Point, rect: &Rectangle) -> bool {
    let (min_x, max_x) = ordered(rect.top_left.x, rect.bottom_right.x);
    let (min_y, max_y) = ordered(rect.top_left.y, rect.bottom_right.y);
    p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
}

/// Whether `p` lies within the circle, boundary inclusive.
pub fn point_in_circle(p: Point, circle: &Circle) -> bool {
    distance_squared(p, circle.center) <= circle.radius * circle.radius
}

#[inline]
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

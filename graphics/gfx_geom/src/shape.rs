//! Rectangle and circle shape values.

use std::fmt;

use crate::{Color, Point};

/// Which slot sequence a shape belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

impl ShapeKind {
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Axis-aligned rectangle given by two opposite corners.
///
/// The corners are not normalized: `top_left` may lie right of or below
/// `bottom_right`. Area and containment handle either order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub top_left: Point,
    pub bottom_right: Point,
    pub color: Color,
    pub filled: bool,
}

impl Rectangle {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(top_left: Point, bottom_right: Point, color: Color, filled: bool) -> Self {
        Rectangle {
            top_left,
            bottom_right,
            color,
            filled,
        }
    }

    /// Same rectangle with its corners swapped.
    #[inline]
    #[must_use]
    pub const fn swapped(self) -> Self {
        Rectangle {
            top_left: self.bottom_right,
            bottom_right: self.top_left,
            ..self
        }
    }

    /// See [`crate::rectangle_area`].
    #[inline]
    pub fn area(&self) -> f64 {
        crate::rectangle_area(self)
    }

    /// See [`crate::point_in_rectangle`].
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        crate::point_in_rectangle(p, self)
    }
}

/// Circle given by center and radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
    pub filled: bool,
}

impl Circle {
    /// Create a new circle.
    #[inline]
    pub const fn new(center: Point, radius: f64, color: Color, filled: bool) -> Self {
        Circle {
            center,
            radius,
            color,
            filled,
        }
    }

    /// See [`crate::circle_area`].
    #[inline]
    pub fn area(&self) -> f64 {
        crate::circle_area(self)
    }

    /// See [`crate::point_in_circle`].
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        crate::point_in_circle(p, self)
    }
}

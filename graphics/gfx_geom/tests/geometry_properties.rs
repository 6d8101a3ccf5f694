//! Property-based tests for the geometry helpers.
//!
//! Covers the invariants the registry and reports rely on:
//! 1. Rectangle area does not depend on corner order
//! 2. A circle always contains its own center
//! 3. Containment agrees with squared distance

#![allow(
    clippy::float_cmp,
    reason = "swapping corners produces bit-identical absolute differences"
)]

use gfx_geom::{
    distance_squared, point_in_circle, point_in_rectangle, rectangle_area, Circle, Color, Point,
    Rectangle,
};
use proptest::prelude::*;

// -- Strategies --

fn coord() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6_f64
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Point::new(x, y, z))
}

fn color_strategy() -> impl Strategy<Value = Color> {
    (0u8..8).prop_map(|i| Color::from_index(i).unwrap_or_default())
}

fn rectangle_strategy() -> impl Strategy<Value = Rectangle> {
    (point_strategy(), point_strategy(), color_strategy(), any::<bool>())
        .prop_map(|(tl, br, color, filled)| Rectangle::new(tl, br, color, filled))
}

proptest! {
    #[test]
    fn rectangle_area_invariant_under_corner_swap(rect in rectangle_strategy()) {
        prop_assert_eq!(rectangle_area(&rect), rectangle_area(&rect.swapped()));
    }

    #[test]
    fn rectangle_area_never_negative(rect in rectangle_strategy()) {
        prop_assert!(rectangle_area(&rect) >= 0.0);
    }

    #[test]
    fn rectangle_contains_both_corners(rect in rectangle_strategy()) {
        prop_assert!(point_in_rectangle(rect.top_left, &rect));
        prop_assert!(point_in_rectangle(rect.bottom_right, &rect));
    }

    #[test]
    fn rectangle_containment_invariant_under_corner_swap(
        rect in rectangle_strategy(),
        p in point_strategy(),
    ) {
        prop_assert_eq!(point_in_rectangle(p, &rect), point_in_rectangle(p, &rect.swapped()));
    }

    #[test]
    fn circle_contains_its_center(
        center in point_strategy(),
        radius in 1.0e-3..1.0e4_f64,
        color in color_strategy(),
        filled in any::<bool>(),
    ) {
        let circle = Circle::new(center, radius, color, filled);
        prop_assert!(point_in_circle(center, &circle));
    }

    #[test]
    fn circle_containment_matches_squared_distance(
        center in point_strategy(),
        p in point_strategy(),
        radius in 0.0..1.0e6_f64,
    ) {
        let circle = Circle::new(center, radius, Color::Blue, false);
        let expected = distance_squared(p, center) <= radius * radius;
        prop_assert_eq!(point_in_circle(p, &circle), expected);
    }

    #[test]
    fn distance_squared_is_symmetric(a in point_strategy(), b in point_strategy()) {
        prop_assert_eq!(distance_squared(a, b), distance_squared(b, a));
    }
}

#![allow(clippy::float_cmp, reason = "coordinates are stored, not computed")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_point_new() {
    let p = Point::new(1.0, -2.5, 3.0);
    assert_eq!(p.x, 1.0);
    assert_eq!(p.y, -2.5);
    assert_eq!(p.z, 3.0);
}

#[test]
fn test_origin_is_default() {
    assert_eq!(Point::ORIGIN, Point::default());
}

#[test]
fn test_from_tuple() {
    assert_eq!(Point::from((4.0, 5.0, 6.0)), Point::new(4.0, 5.0, 6.0));
}

#[test]
fn test_point_display() {
    assert_eq!(Point::new(50.0, 50.0, 0.0).to_string(), "(50.00, 50.00, 0.00)");
    assert_eq!(format!("{:?}", Point::new(1.5, 0.0, -1.0)), "Point(1.5, 0, -1)");
}

#[test]
fn test_distance_squared_method() {
    let a = Point::new(1.0, 2.0, 3.0);
    let b = Point::new(4.0, 6.0, 3.0);
    assert_eq!(a.distance_squared(b), 25.0);
}

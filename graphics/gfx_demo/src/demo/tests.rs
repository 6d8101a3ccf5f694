#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::output::buffer_handler;
use gfx_registry::RegistryConfig;
use pretty_assertions::assert_eq;

const EXPECTED_REPORT: &str = "\
Graphics System Test
====================

System initialized successfully
Added rectangle with ID: 0
Added circle with ID: 0

Rectangle area: 10000.00
Circle area: 1963.49

Test point is inside rectangle
Test point is inside circle

=== System Statistics ===
Total objects: 2
Rectangles: 1
Circles: 1
========================
System cleaned up successfully
";

#[test]
fn test_demo_report() {
    let out = buffer_handler();
    let mut registry = ShapeRegistry::default();

    let summary = run_demo(&mut registry, &out).unwrap();

    assert_eq!(out.get_output(), EXPECTED_REPORT);
    assert_eq!(out.get_errors(), "");
    assert_eq!(summary.rectangle, Ok(SlotIndex::new(0)));
    assert_eq!(summary.circle, Ok(SlotIndex::new(0)));
    assert_eq!(
        summary.statistics,
        Statistics {
            rectangles: 1,
            circles: 1
        }
    );
    assert!((summary.rectangle_area - 10_000.0).abs() < f64::EPSILON);
    assert!((summary.circle_area - 1963.49).abs() < 0.01);
}

#[test]
fn test_demo_leaves_registry_uninitialized() {
    let out = buffer_handler();
    let mut registry = ShapeRegistry::default();
    run_demo(&mut registry, &out).unwrap();

    assert!(!registry.is_initialized());
    assert_eq!(registry.object_count(), 0);
}

#[test]
fn test_demo_can_run_twice_on_same_registry() {
    let out = buffer_handler();
    let mut registry = ShapeRegistry::default();
    run_demo(&mut registry, &out).unwrap();
    out.clear();

    run_demo(&mut registry, &out).unwrap();
    assert_eq!(out.get_output(), EXPECTED_REPORT);
}

#[test]
fn test_demo_fails_on_live_registry() {
    let out = buffer_handler();
    let mut registry = ShapeRegistry::default();
    registry.initialize().unwrap();

    let result = run_demo(&mut registry, &out);

    assert_eq!(
        result,
        Err(DemoError::Initialize(RegistryError::AlreadyInitialized))
    );
    assert_eq!(
        out.get_errors(),
        "System already initialized\nFailed to initialize system\n"
    );
    assert_eq!(out.get_output(), "Graphics System Test\n====================\n\n");
}

#[test]
fn test_demo_reports_rejected_insert_and_continues() {
    let out = buffer_handler();
    let mut registry = ShapeRegistry::new(RegistryConfig::with_capacity(1).unwrap());

    let summary = run_demo(&mut registry, &out).unwrap();

    assert_eq!(
        summary.circle,
        Err(RegistryError::CapacityExceeded { capacity: 1 })
    );
    assert_eq!(
        out.get_errors(),
        "Maximum object count reached (capacity 1)\n"
    );
    let report = out.get_output();
    assert!(report.contains("Added rectangle with ID: 0\nFailed to add circle\n"));
    assert!(report.contains("Total objects: 1\nRectangles: 1\nCircles: 0\n"));
    assert!(report.ends_with("System cleaned up successfully\n"));
}

#[test]
fn test_print_statistics_block() {
    let out = buffer_handler();
    let mut registry = ShapeRegistry::default();
    registry.initialize().unwrap();

    let stats = print_statistics(&registry, &out);

    assert_eq!(stats, Statistics::default());
    assert_eq!(
        out.get_output(),
        "=== System Statistics ===\nTotal objects: 0\nRectangles: 0\nCircles: 0\n========================\n"
    );
}

fn sample_shapes() -> (Rectangle, Circle) {
    let rect = Rectangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(100.0, 100.0, 0.0),
        Color::Red,
        true,
    );
    let circle = Circle::new(Point::new(50.0, 50.0, 0.0), 25.0, Color::Blue, false);
    (rect, circle)
}

#[test]
fn test_containment_inside_both() {
    let out = buffer_handler();
    let (rect, circle) = sample_shapes();

    report_containment(&out, &rect, &circle, Point::new(50.0, 50.0, 0.0));

    assert_eq!(
        out.get_output(),
        "\nTest point is inside rectangle\nTest point is inside circle\n"
    );
}

#[test]
fn test_containment_separator_only_with_rectangle_line() {
    let out = buffer_handler();
    let (rect, _) = sample_shapes();
    // Circle outside the rectangle, containing the test point.
    let circle = Circle::new(Point::new(150.0, 150.0, 0.0), 10.0, Color::Green, true);

    report_containment(&out, &rect, &circle, Point::new(150.0, 150.0, 0.0));

    assert_eq!(out.get_output(), "Test point is inside circle\n");
}

#[test]
fn test_containment_outside_both_prints_nothing() {
    let out = buffer_handler();
    let (rect, circle) = sample_shapes();

    report_containment(&out, &rect, &circle, Point::new(-5.0, -5.0, 0.0));

    assert_eq!(out.get_output(), "");
}

//! The graphics system demonstration.
//!
//! Drives a [`ShapeRegistry`] through its whole lifecycle and prints a
//! report: initialize, insert a sample rectangle and circle, print their
//! areas and a containment test, print slot statistics, clean up.

use gfx_geom::{Circle, Color, Point, Rectangle};
use gfx_registry::{RegistryError, ShapeRegistry, SlotIndex, Statistics};
use thiserror::Error;

use crate::output::PrintHandlerImpl;

/// Failure that aborts the demonstration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoError {
    #[error("Failed to initialize system")]
    Initialize(#[source] RegistryError),
}

/// What the demonstration did, for callers that want more than the report.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoSummary {
    pub rectangle: Result<SlotIndex, RegistryError>,
    pub circle: Result<SlotIndex, RegistryError>,
    pub rectangle_area: f64,
    pub circle_area: f64,
    /// Statistics taken just before cleanup.
    pub statistics: Statistics,
}

/// Run the demonstration against `registry`, printing through `out`.
///
/// Insertion failures are reported as diagnostics and the run continues.
/// Only a failed `initialize` aborts. The registry is cleaned up before a
/// successful return.
pub fn run_demo(
    registry: &mut ShapeRegistry,
    out: &PrintHandlerImpl,
) -> Result<DemoSummary, DemoError> {
    out.println("Graphics System Test");
    out.println("====================");
    out.println("");

    if let Err(err) = registry.initialize() {
        out.eprintln(&err.to_string());
        out.eprintln("Failed to initialize system");
        return Err(DemoError::Initialize(err));
    }
    out.println("System initialized successfully");

    let p1 = Point::new(0.0, 0.0, 0.0);
    let p2 = Point::new(100.0, 100.0, 0.0);
    let center = Point::new(50.0, 50.0, 0.0);

    let rect = Rectangle::new(p1, p2, Color::Red, true);
    let circle = Circle::new(center, 25.0, Color::Blue, false);

    let rect_id = registry.add_rectangle(rect);
    report_insert(out, "rectangle", &rect_id);
    let circle_id = registry.add_circle(circle);
    report_insert(out, "circle", &circle_id);

    let rect_area = rect.area();
    let circle_area = circle.area();
    out.println("");
    out.println(&format!("Rectangle area: {rect_area:.2}"));
    out.println(&format!("Circle area: {circle_area:.2}"));

    let test_point = Point::new(50.0, 50.0, 0.0);
    report_containment(out, &rect, &circle, test_point);

    out.println("");
    let statistics = print_statistics(registry, out);

    registry.cleanup();
    out.println("System cleaned up successfully");

    Ok(DemoSummary {
        rectangle: rect_id,
        circle: circle_id,
        rectangle_area: rect_area,
        circle_area,
        statistics,
    })
}

fn report_insert(out: &PrintHandlerImpl, what: &str, result: &Result<SlotIndex, RegistryError>) {
    match result {
        Ok(index) => out.println(&format!("Added {what} with ID: {index}")),
        Err(err) => {
            out.eprintln(&err.to_string());
            out.println(&format!("Failed to add {what}"));
        }
    }
}

/// Print which sample shapes contain `point`.
///
/// The blank separator line belongs to the rectangle line and is only
/// printed with it.
pub fn report_containment(
    out: &PrintHandlerImpl,
    rect: &Rectangle,
    circle: &Circle,
    point: Point,
) {
    if rect.contains(point) {
        out.println("");
        out.println("Test point is inside rectangle");
    }
    if circle.contains(point) {
        out.println("Test point is inside circle");
    }
}

/// Print the statistics block and return the statistics it showed.
pub fn print_statistics(registry: &ShapeRegistry, out: &PrintHandlerImpl) -> Statistics {
    let statistics = registry.statistics();
    out.println("=== System Statistics ===");
    out.println(&format!("Total objects: {}", registry.object_count()));
    out.println(&format!("Rectangles: {}", statistics.rectangles));
    out.println(&format!("Circles: {}", statistics.circles));
    out.println("========================");
    statistics
}

#[cfg(test)]
mod tests;

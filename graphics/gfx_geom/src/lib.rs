//! Gfx Geom - Geometry Value Types
//!
//! This crate contains the plain data the shape registry stores and the
//! formulas computed over it:
//! - `Point` for 3D coordinates
//! - `Color` for the fixed shape palette
//! - `Rectangle` and `Circle` shape values
//! - Area, squared distance, and containment helpers
//!
//! # Design Philosophy
//!
//! - **Values, not objects**: every type is `Copy` and has no identity.
//!   Identity lives in the registry as slot indices.
//! - **Squared distance**: distances are never square-rooted. Containment
//!   compares squared quantities on both sides.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in values copied into slots.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod color;
mod math;
mod point;
mod shape;

pub use color::Color;
pub use math::{
    circle_area, distance_squared, point_in_circle, point_in_rectangle, rectangle_area,
    AREA_MULTIPLIER,
};
pub use point::Point;
pub use shape::{Circle, Rectangle, ShapeKind};

//! Gfx Registry - Fixed-Capacity Shape Storage
//!
//! Owns the rectangles and circles of the graphics system:
//! - `SlotTable`: first-empty-slot allocation over `Vec<Option<T>>`
//! - `ShapeRegistry`: one slot table per shape kind, a shared object count,
//!   and an explicit initialize/cleanup lifecycle
//! - `RegistryConfig`: capacity configuration
//! - `RegistryError`: every way an operation can be rejected
//!
//! # Architecture
//!
//! Shapes are NOT heap objects with pointers. They are values stored in
//! indexed slots:
//!
//! ```text
//! rectangles: [Some(rect), None, Some(rect), ...]   (len ≤ capacity)
//! circles:    [Some(circle), ...]                   (len ≤ capacity)
//! count:      occupied slots across both tables     (≤ capacity)
//! ```
//!
//! A returned `SlotIndex` stays valid until its slot is removed or the
//! registry is cleaned up. Slots never move.

mod config;
mod error;
mod registry;
mod slots;
mod stats;

pub use config::{RegistryConfig, DEFAULT_CAPACITY};
pub use error::{RegistryError, RegistryResult};
pub use registry::{RegistryState, ShapeRegistry};
pub use slots::{SlotError, SlotIndex, SlotTable};
pub use stats::Statistics;

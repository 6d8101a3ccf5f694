//! Shape Registry - owned storage for rectangles and circles.
//!
//! Manages the lifecycle of shape slots:
//! - Explicit `initialize` / `cleanup` lifecycle
//! - One [`SlotTable`] per shape kind, first-empty-slot allocation
//! - A cached object count shared by both kinds and capped by capacity
//! - Full-scan statistics and point hit tests
//!
//! The registry is a plain owned value. Callers that need sharing across
//! threads wrap it themselves; nothing here is global.

use gfx_geom::{Circle, Point, Rectangle, ShapeKind};

use crate::{
    RegistryConfig, RegistryError, RegistryResult, SlotError, SlotIndex, SlotTable, Statistics,
};

/// Lifecycle state of a [`ShapeRegistry`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RegistryState {
    /// Created or cleaned up. Insertions and hit tests are rejected.
    Uninitialized,
    /// Initialized and accepting shapes.
    Ready,
}

/// Fixed-capacity registry of rectangles and circles.
///
/// # Invariants
///
/// - `object_count` equals the occupied slots across both tables.
/// - `object_count <= config.capacity`.
/// - Both tables are empty while uninitialized.
#[derive(Debug)]
pub struct ShapeRegistry {
    config: RegistryConfig,
    rectangles: SlotTable<Rectangle>,
    circles: SlotTable<Circle>,
    object_count: usize,
    initialized: bool,
}

impl ShapeRegistry {
    /// Create an uninitialized registry.
    pub fn new(config: RegistryConfig) -> Self {
        let capacity = config.capacity;
        ShapeRegistry {
            config,
            rectangles: SlotTable::new(capacity),
            circles: SlotTable::new(capacity),
            object_count: 0,
            initialized: false,
        }
    }

    // Lifecycle

    /// Clear both slot tables and start accepting shapes.
    pub fn initialize(&mut self) -> RegistryResult<()> {
        if self.initialized {
            tracing::warn!("initialize called on a live registry");
            return Err(RegistryError::AlreadyInitialized);
        }

        self.rectangles = SlotTable::new(self.config.capacity);
        self.circles = SlotTable::new(self.config.capacity);
        self.object_count = 0;
        self.initialized = true;

        tracing::debug!(capacity = self.config.capacity, "registry initialized");
        Ok(())
    }

    /// Release every occupied slot and return to the uninitialized state.
    ///
    /// No-op if the registry is not initialized.
    pub fn cleanup(&mut self) {
        if !self.initialized {
            return;
        }

        let rectangles = self.rectangles.clear();
        let circles = self.circles.clear();
        self.object_count = 0;
        self.initialized = false;

        tracing::debug!(rectangles, circles, "registry cleaned up");
    }

    /// Whether `initialize` has succeeded and `cleanup` has not run since.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RegistryState {
        if self.initialized {
            RegistryState::Ready
        } else {
            RegistryState::Uninitialized
        }
    }

    // Insertion

    /// Store a copy of `rect` in the lowest empty rectangle slot.
    pub fn add_rectangle(&mut self, rect: Rectangle) -> RegistryResult<SlotIndex> {
        self.check_admission(ShapeKind::Rectangle)?;
        let result = self.rectangles.insert(rect);
        self.record_insert(ShapeKind::Rectangle, result)
    }

    /// Store a copy of `circle` in the lowest empty circle slot.
    pub fn add_circle(&mut self, circle: Circle) -> RegistryResult<SlotIndex> {
        self.check_admission(ShapeKind::Circle)?;
        let result = self.circles.insert(circle);
        self.record_insert(ShapeKind::Circle, result)
    }

    /// Reject insertion into an uninitialized or full registry.
    fn check_admission(&self, kind: ShapeKind) -> RegistryResult<()> {
        if !self.initialized {
            tracing::warn!(%kind, "insert into uninitialized registry");
            return Err(RegistryError::NotInitialized);
        }
        if self.object_count >= self.config.capacity {
            tracing::warn!(%kind, count = self.object_count, "registry at capacity");
            return Err(RegistryError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }
        Ok(())
    }

    /// Count a successful slot insert, or translate the slot failure.
    fn record_insert(
        &mut self,
        kind: ShapeKind,
        result: Result<SlotIndex, SlotError>,
    ) -> RegistryResult<SlotIndex> {
        match result {
            Ok(index) => {
                self.object_count += 1;
                tracing::debug!(%kind, %index, count = self.object_count, "shape added");
                Ok(index)
            }
            // Unreachable while the count invariant holds: count < capacity
            // leaves at least one slot free in every table.
            Err(SlotError::Full { .. }) => {
                tracing::warn!(%kind, count = self.object_count, "no free slot below capacity");
                Err(RegistryError::CapacityExceeded {
                    capacity: self.config.capacity,
                })
            }
            Err(SlotError::AllocationFailed) => {
                tracing::warn!(%kind, "slot allocation failed");
                Err(RegistryError::AllocationFailure { kind })
            }
        }
    }

    // Removal

    /// Clear a rectangle slot. Returns the rectangle if the slot was occupied.
    pub fn remove_rectangle(&mut self, index: SlotIndex) -> RegistryResult<Option<Rectangle>> {
        self.check_initialized()?;
        let removed = self.rectangles.remove(index);
        self.record_remove(ShapeKind::Rectangle, index, removed.is_some());
        Ok(removed)
    }

    /// Clear a circle slot. Returns the circle if the slot was occupied.
    pub fn remove_circle(&mut self, index: SlotIndex) -> RegistryResult<Option<Circle>> {
        self.check_initialized()?;
        let removed = self.circles.remove(index);
        self.record_remove(ShapeKind::Circle, index, removed.is_some());
        Ok(removed)
    }

    fn record_remove(&mut self, kind: ShapeKind, index: SlotIndex, occupied: bool) {
        if occupied {
            self.object_count -= 1;
            tracing::debug!(%kind, %index, count = self.object_count, "shape removed");
        }
    }

    // Queries

    /// Rectangle in slot `index`, if occupied.
    pub fn rectangle(&self, index: SlotIndex) -> Option<&Rectangle> {
        self.rectangles.get(index)
    }

    /// Circle in slot `index`, if occupied.
    pub fn circle(&self, index: SlotIndex) -> Option<&Circle> {
        self.circles.get(index)
    }

    /// Occupied rectangle slots in index order.
    pub fn rectangles(&self) -> impl Iterator<Item = (SlotIndex, &Rectangle)> + '_ {
        self.rectangles.iter()
    }

    /// Occupied circle slots in index order.
    pub fn circles(&self) -> impl Iterator<Item = (SlotIndex, &Circle)> + '_ {
        self.circles.iter()
    }

    /// Occupied slot counts per kind, recomputed by scanning both tables.
    pub fn statistics(&self) -> Statistics {
        Statistics {
            rectangles: self.rectangles.occupied(),
            circles: self.circles.occupied(),
        }
    }

    /// Cached count of occupied slots across both kinds.
    #[inline]
    pub fn object_count(&self) -> usize {
        self.object_count
    }

    /// Maximum number of shapes the registry holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Configuration the registry was created with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Every shape containing `point`: rectangles first, then circles, each in
    /// slot order.
    pub fn shapes_containing(&self, point: Point) -> RegistryResult<Vec<(ShapeKind, SlotIndex)>> {
        self.check_initialized()?;

        let rectangles = self
            .rectangles
            .iter()
            .filter(|(_, rect)| rect.contains(point))
            .map(|(index, _)| (ShapeKind::Rectangle, index));
        let circles = self
            .circles
            .iter()
            .filter(|(_, circle)| circle.contains(point))
            .map(|(index, _)| (ShapeKind::Circle, index));

        Ok(rectangles.chain(circles).collect())
    }

    fn check_initialized(&self) -> RegistryResult<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(RegistryError::NotInitialized)
        }
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

//! Registry configuration.

/// Slots per shape kind, and the cap on the shared object count.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Configuration for a [`crate::ShapeRegistry`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Maximum occupied slots across both shape kinds.
    ///
    /// Each slot table is also bounded by this value.
    pub capacity: usize,
}

impl RegistryConfig {
    /// Configuration with the given capacity.
    ///
    /// Returns `None` for a zero capacity, which could never hold a shape.
    pub fn with_capacity(capacity: usize) -> Option<Self> {
        (capacity > 0).then_some(RegistryConfig { capacity })
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

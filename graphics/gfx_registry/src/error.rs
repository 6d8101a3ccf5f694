//! Registry errors.
//!
//! Messages match the diagnostics the demo prints to stderr.

use gfx_geom::ShapeKind;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Reasons a registry operation is rejected.
///
/// Every rejection leaves the registry unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Insertion or query before `initialize`.
    #[error("System not initialized")]
    NotInitialized,

    /// `initialize` called on a live registry.
    #[error("System already initialized")]
    AlreadyInitialized,

    /// The shared object count reached capacity, or no free slot remained.
    #[error("Maximum object count reached (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// Storage for a new slot could not be reserved.
    #[error("Memory allocation failed for {kind}")]
    AllocationFailure { kind: ShapeKind },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RegistryError::NotInitialized.to_string(),
            "System not initialized"
        );
        assert_eq!(
            RegistryError::AlreadyInitialized.to_string(),
            "System already initialized"
        );
        assert_eq!(
            RegistryError::CapacityExceeded { capacity: 1000 }.to_string(),
            "Maximum object count reached (capacity 1000)"
        );
        assert_eq!(
            RegistryError::AllocationFailure {
                kind: ShapeKind::Circle
            }
            .to_string(),
            "Memory allocation failed for circle"
        );
    }
}

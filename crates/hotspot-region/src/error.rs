//! Error types for hotspot-region

use thiserror::Error;

/// Errors that can occur during region analysis
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core grid error
    #[error("core error: {0}")]
    Core(#[from] hotspot_core::Error),

    /// Queue created with zero capacity
    #[error("queue capacity must be nonzero")]
    ZeroCapacity,

    /// Enqueue on a queue already holding `capacity` elements
    #[error("queue is full: capacity {capacity}")]
    QueueFull { capacity: usize },

    /// Dequeue on a queue holding no elements
    #[error("queue is empty")]
    QueueEmpty,
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

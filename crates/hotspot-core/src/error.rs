//! Error types for hotspot-core
//!
//! Provides a unified error type for grid construction and access.
//! Each variant captures the offending dimensions or coordinates so
//! failures can be diagnosed without re-inspecting the input.

use thiserror::Error;

/// Hotspot-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Grid with zero rows or zero columns
    #[error("empty grid: {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// Row with a length different from the first row
    #[error("ragged grid: row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Coordinate outside the grid bounds
    #[error("coordinate out of bounds: ({row}, {col}) in {rows}x{cols} grid")]
    CoordOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Result type alias for hotspot-core operations
pub type Result<T> = std::result::Result<T, Error>;

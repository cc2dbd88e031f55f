//! Raster - two-valued rectangular grid
//!
//! A `Raster` is the binary mask the region analysis operates on. Cells
//! carry an abstract [`Marker`] rather than a concrete pixel value; what
//! counts as foreground (a red pixel, a thresholded intensity, ...) is
//! decided by whoever builds the raster.
//!
//! # Layout
//!
//! Cells are stored row-major in a single `Vec`, so `(row, col)` maps to
//! index `row * cols + col`.

use crate::coord::Coord;
use crate::error::{Error, Result};

/// Two-valued cell marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Marker {
    /// Cell belongs to the mask (a "marked" pixel)
    Foreground,
    /// Cell is outside the mask
    #[default]
    Background,
}

impl Marker {
    /// Check whether this marker is foreground.
    #[inline]
    pub fn is_foreground(self) -> bool {
        self == Marker::Foreground
    }
}

/// Rectangular grid of [`Marker`] cells.
///
/// Constructors validate the dimensions, so every live `Raster` is
/// non-empty and rectangular.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    rows: usize,
    cols: usize,
    cells: Vec<Marker>,
}

impl Raster {
    /// Create an all-background raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Marker::Background; rows * cols],
        })
    }

    /// Create a raster from explicit rows of markers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] if there are no rows or the first row
    /// is empty, and [`Error::RaggedRow`] if any row's length differs from
    /// the first row's.
    pub fn from_rows(rows: &[Vec<Marker>]) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(Error::EmptyGrid {
                rows: rows.len(),
                cols,
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Get the marker at (row, col).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Marker> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Set the marker at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordOutOfBounds`] if the coordinate is outside
    /// the grid.
    pub fn set(&mut self, row: usize, col: usize, marker: Marker) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::CoordOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells[row * self.cols + col] = marker;
        Ok(())
    }

    /// Check whether the cell at `coord` is foreground.
    ///
    /// Out-of-bounds coordinates are never foreground.
    #[inline]
    pub fn is_foreground(&self, coord: Coord) -> bool {
        self.get(coord.row, coord.col)
            .is_some_and(Marker::is_foreground)
    }

    /// Count the foreground cells.
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|m| m.is_foreground()).count()
    }
}

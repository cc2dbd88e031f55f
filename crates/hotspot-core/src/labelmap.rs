//! LabelMap - per-cell component labels
//!
//! A `LabelMap` holds one `u32` label per grid cell. Label 0 means "no
//! component" (background or never visited); positive labels identify
//! connected components. Same row-major layout and dimension rules as
//! [`Raster`](crate::Raster).

use crate::error::{Error, Result};

/// Rectangular grid of component labels.
///
/// Constructors validate the dimensions, so every live `LabelMap` is
/// non-empty and rectangular.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    rows: usize,
    cols: usize,
    labels: Vec<u32>,
}

impl LabelMap {
    /// Create an all-zero label map.
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
            labels: vec![0; rows * cols],
        })
    }

    /// Create a label map from explicit rows of labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] if there are no rows or the first row
    /// is empty, and [`Error::RaggedRow`] if any row's length differs from
    /// the first row's.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self> {
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
            labels: rows.iter().flatten().copied().collect(),
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

    /// Get the label at (row, col).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.rows && col < self.cols {
            Some(self.labels[row * self.cols + col])
        } else {
            None
        }
    }

    /// Set the label at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordOutOfBounds`] if the coordinate is outside
    /// the grid.
    pub fn set(&mut self, row: usize, col: usize, label: u32) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::CoordOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.labels[row * self.cols + col] = label;
        Ok(())
    }

    /// Largest label present, 0 if the map is all zero.
    pub fn max_label(&self) -> u32 {
        self.labels.iter().copied().max().unwrap_or(0)
    }

    /// Number of cells carrying a positive label.
    pub fn labeled_count(&self) -> usize {
        self.labels.iter().filter(|&&l| l > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_zero() {
        let map = LabelMap::new(2, 3).unwrap();
        assert_eq!(map.max_label(), 0);
        assert_eq!(map.labeled_count(), 0);
        assert_eq!(map.get(1, 2), Some(0));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(LabelMap::new(0, 3), Err(Error::EmptyGrid { .. })));
        assert!(matches!(LabelMap::new(3, 0), Err(Error::EmptyGrid { .. })));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![1, 0, 2], vec![1, 0]];
        assert!(matches!(
            LabelMap::from_rows(&rows),
            Err(Error::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_set_and_counts() {
        let mut map = LabelMap::new(2, 2).unwrap();
        map.set(0, 0, 1).unwrap();
        map.set(1, 1, 3).unwrap();
        assert!(map.set(2, 0, 1).is_err());
        assert_eq!(map.max_label(), 3);
        assert_eq!(map.labeled_count(), 2);
    }
}

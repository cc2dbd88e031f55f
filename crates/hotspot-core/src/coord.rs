//! Grid coordinates
//!
//! A `Coord` names one cell of a row-major grid. Keeping row and column
//! in a named struct (rather than a bare tuple) prevents the row/column
//! transposition mistakes that plague grid code.

/// A cell position: 0-indexed row and column.
///
/// Plain value type with no identity; `(row, col)` ordering throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, 0-indexed from the top
    pub row: usize,
    /// Column index, 0-indexed from the left
    pub col: usize,
}

impl Coord {
    /// Create a coordinate from row and column indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this coordinate lies inside a `rows` x `cols` grid.
    #[inline]
    pub fn in_bounds(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

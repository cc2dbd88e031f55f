//! 8-adjacency neighbor enumeration
//!
//! Two cells are 8-adjacent when they differ by at most 1 in each of row
//! and column (diagonals included). Cells on an edge have 5 neighbors,
//! corner cells have 3.
//!
//! Enumeration order is row-major over the 3x3 block with the center
//! skipped. Callers must not rely on the order, only on the set.

use crate::error::{RegionError, RegionResult};
use hotspot_core::Coord;

/// Enumerate the in-bounds 8-adjacent neighbors of `coord`.
///
/// # Errors
///
/// Returns an error if `coord` itself lies outside the `rows` x `cols`
/// grid.
pub fn neighbors(coord: Coord, rows: usize, cols: usize) -> RegionResult<Vec<Coord>> {
    let mut out = Vec::with_capacity(8);
    for_each_neighbor(coord, rows, cols, |n| out.push(n))?;
    Ok(out)
}

/// Allocation-free variant of [`neighbors`].
///
/// Invokes `f` once per in-bounds neighbor, in the same order `neighbors`
/// would return them.
pub fn for_each_neighbor<F>(
    coord: Coord,
    rows: usize,
    cols: usize,
    mut f: F,
) -> RegionResult<()>
where
    F: FnMut(Coord),
{
    if !coord.in_bounds(rows, cols) {
        return Err(RegionError::Core(hotspot_core::Error::CoordOutOfBounds {
            row: coord.row,
            col: coord.col,
            rows,
            cols,
        }));
    }

    let row_lo = coord.row.saturating_sub(1);
    let row_hi = (coord.row + 1).min(rows - 1);
    let col_lo = coord.col.saturating_sub(1);
    let col_hi = (coord.col + 1).min(cols - 1);

    for row in row_lo..=row_hi {
        for col in col_lo..=col_hi {
            if row == coord.row && col == coord.col {
                continue;
            }
            f(Coord::new(row, col));
        }
    }
    Ok(())
}

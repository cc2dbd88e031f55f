//! Connected component labeling
//!
//! Partitions the foreground cells of a raster into 8-connected
//! components and assigns each component a positive integer label.
//!
//! The traversal is a multi-source breadth-first search: a row-major scan
//! seeds a new component at every foreground cell that has no label yet,
//! then a FIFO frontier expands the component through 8-adjacency. A cell
//! is labeled at enqueue time, not at dequeue time, so it can never enter
//! the frontier twice.

use crate::error::RegionResult;
use crate::neighbors::for_each_neighbor;
use crate::queue::BoundedQueue;
use hotspot_core::{Coord, LabelMap, Raster};

/// Label the 8-connected foreground components of `raster`.
///
/// Returns a label map of the same dimensions where every foreground cell
/// carries the positive label of its component and every background cell
/// carries 0. Labels are assigned from 1 upward in the order component
/// seeds are reached by a row-major scan, so the labeling is fully
/// deterministic for a given raster.
///
/// The frontier queue has capacity `rows * cols` and each cell is
/// enqueued at most once, so queue overflow is impossible; queue errors
/// propagate only if that invariant is broken by a defect.
///
/// # Examples
///
/// ```
/// use hotspot_core::{Marker, Raster};
/// use hotspot_region::label_components;
///
/// let mut raster = Raster::new(3, 3).unwrap();
/// raster.set(0, 0, Marker::Foreground).unwrap();
/// raster.set(1, 1, Marker::Foreground).unwrap(); // diagonal: same component
/// raster.set(2, 2, Marker::Foreground).unwrap();
///
/// let map = label_components(&raster).unwrap();
/// assert_eq!(map.max_label(), 1);
/// assert_eq!(map.get(2, 2), Some(1));
/// ```
pub fn label_components(raster: &Raster) -> RegionResult<LabelMap> {
    let rows = raster.rows();
    let cols = raster.cols();

    let mut map = LabelMap::new(rows, cols)?;
    // One allocation for the whole run; cleared between components.
    let mut frontier = BoundedQueue::new(rows * cols)?;
    let mut adjacent = Vec::with_capacity(8);
    let mut next_label = 1u32;

    for row in 0..rows {
        for col in 0..cols {
            let seed = Coord::new(row, col);
            if !raster.is_foreground(seed) || map.get(row, col) != Some(0) {
                continue;
            }

            map.set(row, col, next_label)?;
            frontier.clear();
            frontier.enqueue(seed)?;

            while !frontier.is_empty() {
                let cell = frontier.dequeue()?;
                adjacent.clear();
                for_each_neighbor(cell, rows, cols, |n| adjacent.push(n))?;
                for &n in &adjacent {
                    if raster.is_foreground(n) && map.get(n.row, n.col) == Some(0) {
                        map.set(n.row, n.col, next_label)?;
                        frontier.enqueue(n)?;
                    }
                }
            }

            next_label += 1;
        }
    }

    Ok(map)
}

/// Count the 8-connected foreground components of `raster`.
pub fn count_components(raster: &Raster) -> RegionResult<u32> {
    Ok(label_components(raster)?.max_label())
}

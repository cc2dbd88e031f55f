//! Bounded queue regression test
//!
//! Checks the queue protocol at capacity 1 and verifies that the public
//! labeling entry point can never trip the queue's full/empty errors.
//!
//! Run with:
//! ```
//! cargo test -p hotspot-region --test queue_reg
//! ```

use hotspot_core::{Marker, Raster};
use hotspot_region::{BoundedQueue, RegionError, label_components};

#[test]
fn capacity_one_full_and_empty_errors() {
    let mut q = BoundedQueue::new(1).unwrap();
    q.enqueue("x").unwrap();
    assert!(matches!(
        q.enqueue("y"),
        Err(RegionError::QueueFull { capacity: 1 })
    ));
    assert_eq!(q.dequeue().unwrap(), "x");
    assert!(matches!(q.dequeue(), Err(RegionError::QueueEmpty)));
}

#[test]
fn labeling_never_overflows_the_frontier() {
    // Worst case for simultaneous frontier occupancy: every cell is
    // foreground. The mark-at-enqueue rule caps total enqueues at
    // rows * cols, the queue's capacity, so labeling must succeed on
    // grids of any shape.
    for (rows, cols) in [(1, 1), (1, 17), (17, 1), (9, 9), (4, 31)] {
        let mut raster = Raster::new(rows, cols).unwrap();
        for row in 0..rows {
            for col in 0..cols {
                raster.set(row, col, Marker::Foreground).unwrap();
            }
        }
        let map = label_components(&raster).unwrap();
        assert_eq!(map.max_label(), 1, "{rows}x{cols} grid");
        assert_eq!(map.labeled_count(), rows * cols);
    }
}

#[test]
fn labeling_succeeds_on_checkerboard() {
    // A checkerboard maximizes seed count; under 8-adjacency it still
    // collapses to one component, with many short frontier bursts.
    let rows = 8;
    let cols = 8;
    let mut raster = Raster::new(rows, cols).unwrap();
    for row in 0..rows {
        for col in 0..cols {
            if (row + col) % 2 == 0 {
                raster.set(row, col, Marker::Foreground).unwrap();
            }
        }
    }
    let map = label_components(&raster).unwrap();
    assert_eq!(map.max_label(), 1);
    assert_eq!(map.labeled_count(), raster.foreground_count());
}

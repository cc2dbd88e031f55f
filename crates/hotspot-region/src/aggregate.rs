//! Per-component size aggregation
//!
//! Turns a label map into one record per distinct component, counting the
//! cells that carry each label.

use hotspot_core::LabelMap;
use std::collections::HashMap;

/// One labeled component and its cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentRecord {
    /// Component label (positive)
    pub label: u32,
    /// Number of cells carrying the label
    pub size: usize,
}

impl ComponentRecord {
    /// Create a record for `label` with `size` cells.
    pub fn new(label: u32, size: usize) -> Self {
        Self { label, size }
    }
}

/// Count the cells of every positive label in `map`.
///
/// Records appear in the order labels are first encountered by a
/// row-major scan. For maps produced by
/// [`label_components`](crate::label_components) that is ascending label
/// order, since labels are assigned during the same scan.
///
/// The sum of the returned sizes equals
/// [`LabelMap::labeled_count`].
pub fn component_sizes(map: &LabelMap) -> Vec<ComponentRecord> {
    let mut records: Vec<ComponentRecord> = Vec::new();
    let mut index_of: HashMap<u32, usize> = HashMap::new();

    for row in 0..map.rows() {
        for col in 0..map.cols() {
            // In-bounds by construction.
            let Some(label) = map.get(row, col) else {
                continue;
            };
            if label == 0 {
                continue;
            }
            match index_of.get(&label) {
                Some(&i) => records[i].size += 1,
                None => {
                    index_of.insert(label, records.len());
                    records.push(ComponentRecord::new(label, 1));
                }
            }
        }
    }

    records
}

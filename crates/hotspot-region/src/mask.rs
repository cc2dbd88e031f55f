//! Mask rendering from selected labels
//!
//! Builds a derived raster that keeps only the cells belonging to a
//! chosen set of components, for visualization or further processing.

use crate::error::RegionResult;
use hotspot_core::{LabelMap, Marker, Raster};
use std::collections::HashSet;

/// Render a raster that is foreground exactly where `map` carries one of
/// the `selected` labels.
///
/// An empty selection yields an all-background raster of the same
/// dimensions. Label 0 never matches, even if present in `selected`.
pub fn render_mask(map: &LabelMap, selected: &[u32]) -> RegionResult<Raster> {
    let keep: HashSet<u32> = selected.iter().copied().filter(|&l| l > 0).collect();

    let mut out = Raster::new(map.rows(), map.cols())?;
    for row in 0..map.rows() {
        for col in 0..map.cols() {
            if let Some(label) = map.get(row, col)
                && keep.contains(&label)
            {
                out.set(row, col, Marker::Foreground)?;
            }
        }
    }
    Ok(out)
}

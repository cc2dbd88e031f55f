//! High-level analysis wrappers
//!
//! Convenience functions composing the labeling, aggregation, ranking,
//! and mask-rendering steps into one call.

use crate::aggregate::{ComponentRecord, component_sizes};
use crate::error::RegionResult;
use crate::label::label_components;
use crate::mask::render_mask;
use crate::rank::{rank_by_size, top_k_labels};
use hotspot_core::Raster;

/// Label `raster` and return one size record per component.
///
/// Records come back in ascending label order (the order components were
/// seeded during the row-major scan).
pub fn find_components(raster: &Raster) -> RegionResult<Vec<ComponentRecord>> {
    let map = label_components(raster)?;
    Ok(component_sizes(&map))
}

/// Render a mask keeping only the `k` largest components of `raster`.
///
/// Ties are broken toward the smaller label. With fewer than `k`
/// components every component is kept; with none, the result is
/// all-background.
pub fn top_component_mask(raster: &Raster, k: usize) -> RegionResult<Raster> {
    let map = label_components(raster)?;
    let ranked = rank_by_size(&component_sizes(&map));
    let selected = top_k_labels(&ranked, k);
    render_mask(&map, &selected)
}

//! Hotspot - connected-region analysis for two-color rasters
//!
//! Locates the spatially contiguous regions of marked pixels in a binary
//! raster, ranks them by size, and renders masks of the largest ones.
//!
//! # Overview
//!
//! - Grid data structures: `Raster`, `LabelMap`, `Coord`
//! - 8-connectivity component labeling (multi-source BFS)
//! - Per-component size aggregation and descending-size ranking
//! - Top-K mask rendering
//! - Colour thresholding, image encoding, and text reports
//!
//! # Example
//!
//! ```
//! use hotspot::{Marker, Raster};
//! use hotspot::region::{find_components, top_component_mask, DEFAULT_TOP_K};
//!
//! let mut raster = Raster::new(8, 8).unwrap();
//! raster.set(0, 0, Marker::Foreground).unwrap();
//! raster.set(1, 1, Marker::Foreground).unwrap();
//! raster.set(5, 5, Marker::Foreground).unwrap();
//!
//! let records = find_components(&raster).unwrap();
//! assert_eq!(records.len(), 2);
//!
//! let mask = top_component_mask(&raster, DEFAULT_TOP_K).unwrap();
//! assert_eq!(mask.foreground_count(), 3);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use hotspot_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use hotspot_io as io;
pub use hotspot_region as region;

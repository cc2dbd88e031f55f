//! hotspot-region - Connected component analysis for two-color rasters
//!
//! This crate locates the 8-connected regions of foreground cells in a
//! [`Raster`](hotspot_core::Raster) and ranks them by size:
//!
//! - **[`BoundedQueue`]** - fixed-capacity FIFO used as the BFS frontier
//! - **[`neighbors`]** - boundary-aware 8-adjacency enumeration
//! - **[`label_components`]** - multi-source BFS labeling
//! - **[`component_sizes`]** - per-label cell counts
//! - **[`rank_by_size`]** / **[`top_k_labels`]** - descending-size ranking
//! - **[`render_mask`]** - derived raster keeping only selected components
//!
//! # Examples
//!
//! ## Labeling and ranking
//!
//! ```
//! use hotspot_core::{Marker, Raster};
//! use hotspot_region::{component_sizes, label_components, rank_by_size, top_k_labels};
//!
//! let mut raster = Raster::new(4, 4).unwrap();
//! for col in 0..3 {
//!     raster.set(0, col, Marker::Foreground).unwrap();
//! }
//! raster.set(3, 3, Marker::Foreground).unwrap();
//!
//! let map = label_components(&raster).unwrap();
//! let ranked = rank_by_size(&component_sizes(&map));
//! assert_eq!(ranked[0].size, 3);
//! assert_eq!(top_k_labels(&ranked, 1), vec![1]);
//! ```
//!
//! ## One-call pipeline
//!
//! ```
//! use hotspot_core::Raster;
//! use hotspot_region::{DEFAULT_TOP_K, top_component_mask};
//!
//! let raster = Raster::new(8, 8).unwrap();
//! let mask = top_component_mask(&raster, DEFAULT_TOP_K).unwrap();
//! assert_eq!(mask.foreground_count(), 0);
//! ```

pub mod aggregate;
pub mod analysis;
pub mod error;
pub mod label;
pub mod mask;
pub mod neighbors;
pub mod queue;
pub mod rank;

// Re-export core types
pub use hotspot_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export queue types
pub use queue::BoundedQueue;

// Re-export neighbor functions
pub use neighbors::{for_each_neighbor, neighbors};

// Re-export labeling functions
pub use label::{count_components, label_components};

// Re-export aggregation types and functions
pub use aggregate::{ComponentRecord, component_sizes};

// Re-export ranking functions
pub use rank::{DEFAULT_TOP_K, rank_by_size, top_k_labels};

// Re-export mask rendering
pub use mask::render_mask;

// Re-export high-level wrappers
pub use analysis::{find_components, top_component_mask};

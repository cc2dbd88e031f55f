//! hotspot-core - Grid data structures for region analysis
//!
//! This crate provides the in-memory value types the hotspot workspace
//! operates on:
//!
//! - **[`Raster`]** - a rectangular two-valued mask (foreground/background)
//! - **[`LabelMap`]** - a rectangular grid of component labels (0 = none)
//! - **[`Coord`]** - a 0-indexed (row, col) cell position
//!
//! The marker is abstract on purpose: whether "foreground" means a red
//! pixel, a thresholded intensity, or anything else is decided by the
//! code that builds the raster (see `hotspot-io`), not here.
//!
//! # Example
//!
//! ```
//! use hotspot_core::{Marker, Raster};
//!
//! let mut raster = Raster::new(4, 4).unwrap();
//! raster.set(1, 1, Marker::Foreground).unwrap();
//! raster.set(1, 2, Marker::Foreground).unwrap();
//! assert_eq!(raster.foreground_count(), 2);
//! ```

mod coord;
pub mod error;
mod labelmap;
mod raster;

pub use coord::Coord;
pub use error::{Error, Result};
pub use labelmap::LabelMap;
pub use raster::{Marker, Raster};

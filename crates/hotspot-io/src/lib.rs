//! hotspot-io - Thresholding, mask encoding, and reports
//!
//! The collaborator layer around the in-memory core: this crate decides
//! what a foreground pixel looks like, turns RGB images into rasters, and
//! persists analysis results.
//!
//! - **Thresholding** - classify RGB pixels into foreground/background
//! - **Encoding** - load source images, write masks as greyscale images
//! - **Reports** - plain-text per-component summaries
//!
//! # Example
//!
//! ```
//! use hotspot_io::{MarkerRule, ThresholdOptions, threshold_image};
//! use hotspot_region::find_components;
//! use image::{Rgb, RgbImage};
//!
//! let mut img = RgbImage::new(4, 4);
//! img.put_pixel(0, 0, Rgb([255, 0, 0]));
//! img.put_pixel(1, 1, Rgb([255, 0, 0]));
//!
//! let raster = threshold_image(&img, MarkerRule::Red, &ThresholdOptions::default()).unwrap();
//! let records = find_components(&raster).unwrap();
//! assert_eq!(records.len(), 1); // diagonal pixels join under 8-adjacency
//! assert_eq!(records[0].size, 2);
//! ```

pub mod encode;
pub mod error;
pub mod report;
pub mod threshold;

// Re-export error types
pub use error::{IoError, IoResult};

// Re-export thresholding types and functions
pub use threshold::{MarkerRule, ThresholdOptions, threshold_image};

// Re-export encoding functions
pub use encode::{load_rgb, mask_to_gray, save_mask};

// Re-export report functions
pub use report::{save_component_report, write_component_report};

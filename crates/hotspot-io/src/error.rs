//! Error types for hotspot-io

use thiserror::Error;

/// Errors that can occur during thresholding, encoding, or report writing
#[derive(Debug, Error)]
pub enum IoError {
    /// Core grid error
    #[error("core error: {0}")]
    Core(#[from] hotspot_core::Error),

    /// Region analysis error
    #[error("region error: {0}")]
    Region(#[from] hotspot_region::RegionError),

    /// Image decode/encode error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Underlying I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hotspot-io operations
pub type IoResult<T> = Result<T, IoError>;

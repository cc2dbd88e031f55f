//! Mask image encode/decode
//!
//! Loads RGB source images and writes rasters out as greyscale images:
//! foreground is rendered black on a white background.

use crate::error::IoResult;
use hotspot_core::Raster;
use image::{GrayImage, Luma, RgbImage};
use std::path::Path;

/// Load an image file and convert it to RGB.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    Ok(image::open(path)?.to_rgb8())
}

/// Render a raster as a greyscale image: foreground black, background
/// white.
pub fn mask_to_gray(raster: &Raster) -> GrayImage {
    let mut img = GrayImage::from_pixel(
        raster.cols() as u32,
        raster.rows() as u32,
        Luma([255u8]),
    );
    for row in 0..raster.rows() {
        for col in 0..raster.cols() {
            if raster.get(row, col).is_some_and(|m| m.is_foreground()) {
                img.put_pixel(col as u32, row as u32, Luma([0u8]));
            }
        }
    }
    img
}

/// Write a raster to an image file (format inferred from the extension).
pub fn save_mask<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    mask_to_gray(raster).save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotspot_core::Marker;

    #[test]
    fn test_mask_to_gray_values() {
        let mut raster = Raster::new(2, 3).unwrap();
        raster.set(0, 1, Marker::Foreground).unwrap();
        raster.set(1, 2, Marker::Foreground).unwrap();

        let img = mask_to_gray(&raster);
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(1, 0), &Luma([0u8]));
        assert_eq!(img.get_pixel(2, 1), &Luma([0u8]));
        assert_eq!(img.get_pixel(0, 0), &Luma([255u8]));
        assert_eq!(img.get_pixel(2, 0), &Luma([255u8]));
    }

    #[test]
    fn test_all_background_is_all_white() {
        let img = mask_to_gray(&Raster::new(4, 4).unwrap());
        assert!(img.pixels().all(|p| p.0[0] == 255));
    }
}

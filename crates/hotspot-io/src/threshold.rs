//! Colour thresholding
//!
//! Classifies each pixel of an RGB image against a marker rule and builds
//! the binary [`Raster`] the region analysis runs on. This is where the
//! abstract foreground/background marker gets its concrete meaning.

use crate::error::IoResult;
use hotspot_core::{Marker, Raster};
use image::{Rgb, RgbImage};

/// Channel thresholds for marker classification.
///
/// A "strong" channel must exceed `upper`; a "weak" channel must stay
/// below `lower`.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdOptions {
    /// Threshold a dominant channel must exceed
    pub upper: u8,
    /// Threshold the remaining channels must stay under
    pub lower: u8,
}

impl Default for ThresholdOptions {
    fn default() -> Self {
        Self {
            upper: 100,
            lower: 50,
        }
    }
}

impl ThresholdOptions {
    /// Create options with the given thresholds.
    pub fn new(upper: u8, lower: u8) -> Self {
        Self { upper, lower }
    }

    /// Set the upper threshold.
    pub fn with_upper(mut self, upper: u8) -> Self {
        self.upper = upper;
        self
    }

    /// Set the lower threshold.
    pub fn with_lower(mut self, lower: u8) -> Self {
        self.lower = lower;
        self
    }
}

/// Which colour counts as a marked pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRule {
    /// Red-dominant pixels: r > upper, g < lower, b < lower
    Red,
    /// Cyan-dominant pixels: r < lower, g > upper, b > upper
    Cyan,
}

impl MarkerRule {
    /// Check whether `pixel` matches this rule under `opts`.
    pub fn matches(self, pixel: Rgb<u8>, opts: &ThresholdOptions) -> bool {
        let Rgb([r, g, b]) = pixel;
        match self {
            MarkerRule::Red => r > opts.upper && g < opts.lower && b < opts.lower,
            MarkerRule::Cyan => r < opts.lower && g > opts.upper && b > opts.upper,
        }
    }
}

/// Threshold `img` into a raster: pixels matching `rule` become
/// foreground, everything else background.
///
/// The raster has one row per image row and one column per image column.
///
/// # Errors
///
/// Fails if the image has zero width or height.
pub fn threshold_image(
    img: &RgbImage,
    rule: MarkerRule,
    opts: &ThresholdOptions,
) -> IoResult<Raster> {
    let (width, height) = img.dimensions();
    let mut raster = Raster::new(height as usize, width as usize)?;

    for (x, y, pixel) in img.enumerate_pixels() {
        if rule.matches(*pixel, opts) {
            raster.set(y as usize, x as usize, Marker::Foreground)?;
        }
    }

    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_rule() {
        let opts = ThresholdOptions::default();
        assert!(MarkerRule::Red.matches(Rgb([200, 10, 10]), &opts));
        assert!(!MarkerRule::Red.matches(Rgb([200, 80, 10]), &opts));
        assert!(!MarkerRule::Red.matches(Rgb([90, 10, 10]), &opts));
    }

    #[test]
    fn test_cyan_rule() {
        let opts = ThresholdOptions::default();
        assert!(MarkerRule::Cyan.matches(Rgb([10, 200, 200]), &opts));
        assert!(!MarkerRule::Cyan.matches(Rgb([10, 200, 50]), &opts));
        assert!(!MarkerRule::Cyan.matches(Rgb([200, 200, 200]), &opts));
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Values exactly at a threshold do not match.
        let opts = ThresholdOptions::new(100, 50);
        assert!(!MarkerRule::Red.matches(Rgb([100, 0, 0]), &opts));
        assert!(!MarkerRule::Red.matches(Rgb([101, 50, 0]), &opts));
        assert!(MarkerRule::Red.matches(Rgb([101, 49, 49]), &opts));
    }

    #[test]
    fn test_threshold_image() {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(2, 1, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 255, 255])); // cyan, not red

        let raster =
            threshold_image(&img, MarkerRule::Red, &ThresholdOptions::default()).unwrap();
        assert_eq!(raster.rows(), 2);
        assert_eq!(raster.cols(), 3);
        assert_eq!(raster.get(0, 0), Some(Marker::Foreground));
        assert_eq!(raster.get(1, 2), Some(Marker::Foreground));
        assert_eq!(raster.get(0, 1), Some(Marker::Background));
        assert_eq!(raster.foreground_count(), 2);
    }

    #[test]
    fn test_empty_image_rejected() {
        let img = RgbImage::new(0, 0);
        assert!(threshold_image(&img, MarkerRule::Red, &ThresholdOptions::default()).is_err());
    }

    #[test]
    fn test_builder_options() {
        let opts = ThresholdOptions::default().with_upper(150).with_lower(30);
        assert_eq!(opts.upper, 150);
        assert_eq!(opts.lower, 30);
        assert!(!MarkerRule::Red.matches(Rgb([140, 0, 0]), &opts));
        assert!(MarkerRule::Red.matches(Rgb([160, 0, 0]), &opts));
    }
}

//! Borrowed raster surfaces: the read and fill capabilities the
//! pipeline is handed by its caller.
//!
//! The pipeline never owns pixel data. It borrows read access to a
//! source and exclusive write access to a sink for the duration of one
//! render pass; both are implemented here for `image::RgbImage` so any
//! decoded image can act as either end.

use image::RgbImage;
use thiserror::Error;

use crate::color::Colour;
use crate::raster::BlockRegion;

/// A region read was refused by the surface.
///
/// Some platforms restrict pixel readback (the canonical case is a
/// security-tainted image source). A refusal is a reportable condition,
/// never silently coerced to a colour.
#[derive(Debug, Clone, Error)]
#[error("{reason}")]
pub struct ReadRefused {
    pub reason: String,
}

impl ReadRefused {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Read access to a raster with known dimensions.
pub trait RasterSource {
    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Read the pixels of `region`, row-major.
    ///
    /// `region` is always within bounds. The surface may refuse the read.
    fn read_region(&self, region: BlockRegion) -> Result<Vec<Colour>, ReadRefused>;

    /// Check that the surface can actually be read before a pass starts.
    fn probe(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Write access to a raster with known dimensions.
pub trait RasterSink {
    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Fill `region` with a solid colour. `region` is always within bounds.
    fn fill_region(&mut self, region: BlockRegion, colour: Colour);

    /// Check that the surface can actually be painted before a pass starts.
    fn probe(&self) -> Result<(), String> {
        Ok(())
    }
}

impl RasterSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn read_region(&self, region: BlockRegion) -> Result<Vec<Colour>, ReadRefused> {
        let mut pixels = Vec::with_capacity(region.pixel_count());
        for y in region.y..region.y + region.height {
            for x in region.x..region.x + region.width {
                let [r, g, b] = self.get_pixel(x, y).0;
                pixels.push(Colour::new(r, g, b));
            }
        }
        Ok(pixels)
    }
}

impl RasterSink for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn fill_region(&mut self, region: BlockRegion, colour: Colour) {
        let pixel = image::Rgb(colour.channels());
        for y in region.y..region.y + region.height {
            for x in region.x..region.x + region.width {
                self.put_pixel(x, y, pixel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_region_row_major() {
        let mut img = RgbImage::new(4, 4);
        img.put_pixel(1, 1, image::Rgb([10, 20, 30]));
        img.put_pixel(2, 1, image::Rgb([40, 50, 60]));

        let region = BlockRegion { x: 1, y: 1, width: 2, height: 1 };
        let pixels = RasterSource::read_region(&img, region).unwrap();

        assert_eq!(pixels, vec![Colour::new(10, 20, 30), Colour::new(40, 50, 60)]);
    }

    #[test]
    fn test_fill_region_stays_inside_bounds() {
        let mut img = RgbImage::new(4, 4);
        let region = BlockRegion { x: 2, y: 2, width: 2, height: 2 };
        img.fill_region(region, Colour::WHITE);

        for y in 0..4 {
            for x in 0..4 {
                let expected = if x >= 2 && y >= 2 { 255 } else { 0 };
                assert_eq!(img.get_pixel(x, y).0, [expected; 3], "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_image_surfaces_report_dimensions() {
        let img = RgbImage::new(7, 3);
        assert_eq!(RasterSource::dimensions(&img), (7, 3));

        let sink = RgbImage::new(7, 3);
        assert_eq!(RasterSink::dimensions(&sink), (7, 3));
    }

    #[test]
    fn test_default_probe_is_ok() {
        let img = RgbImage::new(1, 1);
        assert!(RasterSource::probe(&img).is_ok());
        assert!(RasterSink::probe(&img).is_ok());
    }
}

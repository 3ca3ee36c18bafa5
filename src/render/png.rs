//! PNG output for rendered mosaics.
//!
//! Writes finished rasters to PNG files with optional integer upscaling,
//! nearest-neighbour so the blocks stay crisp.

use std::path::Path;

use image::RgbImage;

use crate::error::{MosaicError, Result};

/// Upscale a raster by an integer factor, nearest-neighbour.
pub fn upscale(img: &RgbImage, scale: u32) -> RgbImage {
    if scale <= 1 {
        return img.clone();
    }

    RgbImage::from_fn(img.width() * scale, img.height() * scale, |x, y| {
        *img.get_pixel(x / scale, y / scale)
    })
}

/// Write a raster to a PNG file.
///
/// # Arguments
///
/// * `img` - The raster to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(img: &RgbImage, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1); // Minimum scale of 1

    let out = if scale > 1 { upscale(img, scale) } else { img.clone() };

    out.save(path).map_err(|e| MosaicError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

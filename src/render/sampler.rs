//! Representative-colour extraction for a block.
//!
//! A sampler reduces one block region to a single RGB triple. Two
//! implementations are provided and selected through the options:
//!
//! - [`BoxResizeSampler`] materializes the block and area-resizes it to
//!   a single pixel, the fast readback trick the effect was built on.
//! - [`PixelAverageSampler`] computes the exact per-channel mean.
//!
//! Both satisfy "one triple representative of the block"; they can
//! differ by a rounding step on blocks with high-frequency content, so
//! the choice is part of the configuration rather than an internal
//! detail.

use clap::ValueEnum;
use image::RgbImage;
use serde::Deserialize;

use crate::color::Colour;
use crate::raster::{BlockRegion, RasterSource, ReadRefused};

/// Extracts one representative colour from a block region.
pub trait Sampler {
    fn sample(
        &self,
        source: &dyn RasterSource,
        region: BlockRegion,
    ) -> Result<Colour, ReadRefused>;
}

/// Which sampler implementation a render pass uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SamplerKind {
    /// Area-resize the block to a single pixel and read it back.
    #[default]
    BoxResize,
    /// Average every pixel of the block explicitly.
    PixelAverage,
}

impl SamplerKind {
    /// Construct the sampler this kind names.
    pub fn create(self) -> Box<dyn Sampler> {
        match self {
            SamplerKind::BoxResize => Box::new(BoxResizeSampler),
            SamplerKind::PixelAverage => Box::new(PixelAverageSampler),
        }
    }
}

/// Samples a block by scaling it down to one pixel with the `image`
/// crate's box filter.
pub struct BoxResizeSampler;

impl Sampler for BoxResizeSampler {
    fn sample(
        &self,
        source: &dyn RasterSource,
        region: BlockRegion,
    ) -> Result<Colour, ReadRefused> {
        let pixels = source.read_region(region)?;

        let mut block = RgbImage::new(region.width, region.height);
        for (i, colour) in pixels.iter().enumerate() {
            let x = i as u32 % region.width;
            let y = i as u32 / region.width;
            block.put_pixel(x, y, image::Rgb(colour.channels()));
        }

        let one = image::imageops::thumbnail(&block, 1, 1);
        let [r, g, b] = one.get_pixel(0, 0).0;
        Ok(Colour::new(r, g, b))
    }
}

/// Samples a block by averaging every pixel, rounding each channel.
pub struct PixelAverageSampler;

impl Sampler for PixelAverageSampler {
    fn sample(
        &self,
        source: &dyn RasterSource,
        region: BlockRegion,
    ) -> Result<Colour, ReadRefused> {
        let pixels = source.read_region(region)?;

        let n = pixels.len() as u64;
        let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
        for colour in &pixels {
            r += colour.r as u64;
            g += colour.g as u64;
            b += colour.b as u64;
        }

        // Rounded integer division; regions are never empty.
        Ok(Colour::new(
            ((r + n / 2) / n) as u8,
            ((g + n / 2) / n) as u8,
            ((b + n / 2) / n) as u8,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32, colour: Colour) -> RgbImage {
        RgbImage::from_pixel(width, height, image::Rgb(colour.channels()))
    }

    fn full_region(img: &RgbImage) -> BlockRegion {
        BlockRegion {
            x: 0,
            y: 0,
            width: img.width(),
            height: img.height(),
        }
    }

    #[test]
    fn test_both_samplers_preserve_uniform_blocks() {
        let colour = Colour::new(200, 40, 90);
        let img = uniform(5, 5, colour);
        let region = full_region(&img);

        assert_eq!(BoxResizeSampler.sample(&img, region).unwrap(), colour);
        assert_eq!(PixelAverageSampler.sample(&img, region).unwrap(), colour);
    }

    #[test]
    fn test_pixel_average_checkerboard() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgb([255, 255, 255]));
        img.put_pixel(1, 1, image::Rgb([255, 255, 255]));

        let sampled = PixelAverageSampler
            .sample(&img, full_region(&img))
            .unwrap();
        // (255 + 255 + 0 + 0 + 2) / 4 = 128
        assert_eq!(sampled, Colour::new(128, 128, 128));
    }

    #[test]
    fn test_pixel_average_single_row() {
        let mut img = RgbImage::new(3, 1);
        img.put_pixel(0, 0, image::Rgb([10, 0, 0]));
        img.put_pixel(1, 0, image::Rgb([20, 0, 0]));
        img.put_pixel(2, 0, image::Rgb([40, 0, 0]));

        let sampled = PixelAverageSampler
            .sample(&img, full_region(&img))
            .unwrap();
        // (10 + 20 + 40 + 1) / 3 = 23
        assert_eq!(sampled.r, 23);
    }

    #[test]
    fn test_samplers_agree_within_rounding_on_mixed_blocks() {
        let mut img = RgbImage::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                let v = (x * 60 + y * 15) as u8;
                img.put_pixel(x, y, image::Rgb([v, v / 2, 255 - v]));
            }
        }
        let region = full_region(&img);

        let fast = BoxResizeSampler.sample(&img, region).unwrap();
        let exact = PixelAverageSampler.sample(&img, region).unwrap();

        for (a, b) in fast.channels().iter().zip(exact.channels()) {
            assert!((*a as i32 - b as i32).abs() <= 1, "{} vs {}", fast, exact);
        }
    }

    #[test]
    fn test_sampler_propagates_refusal() {
        struct Refusing;

        impl RasterSource for Refusing {
            fn dimensions(&self) -> (u32, u32) {
                (4, 4)
            }

            fn read_region(&self, _region: BlockRegion) -> Result<Vec<Colour>, ReadRefused> {
                Err(ReadRefused::new("tainted source"))
            }
        }

        let region = BlockRegion { x: 0, y: 0, width: 2, height: 2 };
        for kind in [SamplerKind::BoxResize, SamplerKind::PixelAverage] {
            let err = kind.create().sample(&Refusing, region).unwrap_err();
            assert_eq!(err.reason, "tainted source");
        }
    }

    #[test]
    fn test_kind_create_dispatch() {
        let img = uniform(2, 2, Colour::new(9, 9, 9));
        let region = full_region(&img);

        for kind in [SamplerKind::BoxResize, SamplerKind::PixelAverage] {
            assert_eq!(
                kind.create().sample(&img, region).unwrap(),
                Colour::new(9, 9, 9)
            );
        }
    }
}

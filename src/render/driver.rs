//! Mosaic renderer - walks the block grid and paints quantized blocks.

use image::RgbImage;

use crate::color::{Colour, Hsl};
use crate::config::MosaicOptions;
use crate::error::{MosaicError, Result};
use crate::raster::{blocks, BlockRegion, RasterSink, RasterSource};
use crate::render::Sampler;

/// What a completed render pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    /// Number of blocks sampled and filled.
    pub blocks: usize,
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
}

/// Renders the 8-bit mosaic effect into a raster sink.
///
/// One renderer holds one validated set of options and the sampler they
/// select; it can run any number of passes. Each pass borrows a source
/// read-only and a sink exclusively.
pub struct MosaicRenderer {
    options: MosaicOptions,
    sampler: Box<dyn Sampler>,
}

impl std::fmt::Debug for MosaicRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MosaicRenderer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl MosaicRenderer {
    /// Create a renderer, validating the options before any pixel work.
    pub fn new(options: MosaicOptions) -> Result<Self> {
        options.validate()?;
        let sampler = options.sampler.create();
        Ok(Self { options, sampler })
    }

    /// The options this renderer runs with.
    pub fn options(&self) -> &MosaicOptions {
        &self.options
    }

    /// Render the mosaic of `source` into `sink`.
    ///
    /// Blocks are processed row-major, left-to-right, top-to-bottom. A
    /// refused sample aborts the pass with the completed-block count;
    /// everything filled so far stays filled, everything after stays
    /// untouched.
    pub fn render_into(
        &self,
        source: &dyn RasterSource,
        sink: &mut dyn RasterSink,
    ) -> Result<RenderStats> {
        let (width, height) = self.check_surfaces(source, sink.dimensions())?;
        sink.probe()
            .map_err(|message| MosaicError::Unsupported { message })?;

        let filled = self.walk(source, |region, colour| sink.fill_region(region, colour))?;

        Ok(RenderStats {
            blocks: filled,
            width,
            height,
        })
    }

    /// Render the mosaic of `source` into a freshly allocated raster.
    pub fn render(&self, source: &RgbImage) -> Result<RgbImage> {
        let mut sink = RgbImage::new(source.width(), source.height());
        self.render_into(source, &mut sink)?;
        Ok(sink)
    }

    /// The distinct quantized colours a render of `source` would paint,
    /// with their block counts, most frequent first.
    ///
    /// Ties break on channel value so the report is deterministic.
    pub fn quantized_palette(&self, source: &dyn RasterSource) -> Result<Vec<(Colour, usize)>> {
        use std::collections::HashMap;

        self.check_surfaces(source, source.dimensions())?;

        let mut counts: HashMap<Colour, usize> = HashMap::new();
        self.walk(source, |_region, colour| {
            *counts.entry(colour).or_insert(0) += 1;
        })?;

        let mut colours: Vec<(Colour, usize)> = counts.into_iter().collect();
        colours.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| a.0.channels().cmp(&b.0.channels()))
        });
        Ok(colours)
    }

    /// Sample and quantize every block row-major, handing each to `visit`.
    /// Returns the number of blocks visited.
    fn walk(
        &self,
        source: &dyn RasterSource,
        mut visit: impl FnMut(BlockRegion, Colour),
    ) -> Result<usize> {
        let (width, height) = source.dimensions();
        let total = self.block_count(width, height);
        let mut completed = 0usize;

        for region in blocks(width, height, self.options.blocksize) {
            let sampled = self
                .sampler
                .sample(source, region)
                .map_err(|refused| MosaicError::SampleRefused {
                    x: region.x,
                    y: region.y,
                    completed,
                    total,
                    reason: refused.reason,
                })?;

            let colour = Hsl::from_rgb(sampled)
                .quantize(self.options.granularity)
                .to_rgb();
            visit(region, colour);
            completed += 1;
        }

        Ok(completed)
    }

    /// Probe the source and check the sink matches it, before any block work.
    fn check_surfaces(
        &self,
        source: &dyn RasterSource,
        sink_dimensions: (u32, u32),
    ) -> Result<(u32, u32)> {
        source
            .probe()
            .map_err(|message| MosaicError::Unsupported { message })?;

        let (width, height) = source.dimensions();
        if sink_dimensions != (width, height) {
            return Err(MosaicError::Unsupported {
                message: format!(
                    "sink is {}x{} but source is {}x{}",
                    sink_dimensions.0, sink_dimensions.1, width, height
                ),
            });
        }

        Ok((width, height))
    }

    fn block_count(&self, width: u32, height: u32) -> usize {
        let b = self.options.blocksize;
        width.div_ceil(b) as usize * height.div_ceil(b) as usize
    }
}

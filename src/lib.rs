//! mosaic8 - retro 8-bit mosaic renderer
//!
//! A library and CLI for giving raster images the look of good old 8-bit
//! graphics: the image is partitioned into fixed-size blocks, each block
//! is reduced to one representative colour, that colour is snapped onto
//! a coarse HSL grid, and the block is painted back as a solid tile.

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod output;
pub mod raster;
pub mod render;

pub use color::{Colour, Hsl, QuantizedHsl};
pub use config::{MosaicOptions, DEFAULT_BLOCKSIZE, DEFAULT_GRANULARITY};
pub use error::{MosaicError, Result};
pub use raster::{blocks, BlockRegion, Blocks, RasterSink, RasterSource, ReadRefused};
pub use render::{
    upscale, write_png, BoxResizeSampler, MosaicRenderer, PixelAverageSampler, RenderStats,
    Sampler, SamplerKind,
};

//! Rendering module for mosaic8.
//!
//! This module holds the render pass: sampling a representative colour
//! per block, quantizing it, and painting the block grid into a sink.

mod driver;
mod png;
mod sampler;

pub use driver::{MosaicRenderer, RenderStats};
pub use png::{upscale, write_png};
pub use sampler::{BoxResizeSampler, PixelAverageSampler, Sampler, SamplerKind};

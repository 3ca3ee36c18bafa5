//! Raster access for the mosaic pipeline.
//!
//! This module contains the block geometry and the borrowed-surface
//! traits the pipeline reads from and paints into:
//! - `BlockRegion` / `blocks` - the edge-clipped block grid
//! - `RasterSource` / `RasterSink` - read and fill capabilities,
//!   implemented for `image` buffers

mod region;
mod surface;

pub use region::{blocks, BlockRegion, Blocks};
pub use surface::{RasterSink, RasterSource, ReadRefused};

//! Colour types for the mosaic pipeline.
//!
//! This module contains the colour-space kernel:
//! - `Colour` - RGB colour values as read from and written to rasters
//! - `Hsl` - normalized hue/saturation/lightness decomposition
//! - `QuantizedHsl` - an HSL colour snapped to the granularity grid

mod colour;
mod hsl;

pub use colour::Colour;
pub use hsl::{Hsl, QuantizedHsl};

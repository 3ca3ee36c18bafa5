//! HSL decomposition and granularity quantization.
//!
//! The mosaic effect works on the HSL axes: each sampled block colour is
//! decomposed into hue/saturation/lightness, every channel is snapped
//! independently onto a 0-100 grid whose step is the granularity, and the
//! snapped colour is converted back to RGB for painting. Larger
//! granularity values leave fewer grid points and therefore fewer
//! distinguishable output colours.

use crate::color::Colour;

/// A colour in normalized HSL space, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// Which RGB channel attained the maximum.
///
/// Ties resolve first-match-wins in `r`, `g`, `b` order, so e.g. pure
/// yellow (`r == g`) takes the red branch. The branch chosen decides the
/// hue formula, so the order is part of the observable behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MaxChannel {
    R,
    G,
    B,
}

impl MaxChannel {
    fn of(r: f32, g: f32, b: f32, max: f32) -> Self {
        if r == max {
            MaxChannel::R
        } else if g == max {
            MaxChannel::G
        } else {
            MaxChannel::B
        }
    }
}

impl Hsl {
    /// Decompose an RGB colour into normalized HSL.
    ///
    /// The standard decomposition: `l` is the mid-point of the channel
    /// extremes, `s` is the spread scaled against the lightness, and hue
    /// is derived from whichever channel is largest.
    pub fn from_rgb(colour: Colour) -> Self {
        let r = colour.r as f32 / 255.0;
        let g = colour.g as f32 / 255.0;
        let b = colour.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue is undefined, pinned to 0.
            return Self { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = match MaxChannel::of(r, g, b, max) {
            MaxChannel::R => (g - b) / d + if g < b { 6.0 } else { 0.0 },
            MaxChannel::G => (b - r) / d + 2.0,
            MaxChannel::B => (r - g) / d + 4.0,
        } / 6.0;

        Self { h, s, l }
    }

    /// Snap each channel independently onto the granularity grid.
    ///
    /// Channels are rescaled to a 0-100 axis, rounded to the nearest
    /// multiple of `granularity`, and hue is then rescaled to degrees
    /// (x3.6, since 100 x 3.6 = 360). A hue that rounds up to a full turn
    /// is normalized back to 0 so the result always sits in `[0, 360)`.
    pub fn quantize(self, granularity: u32) -> QuantizedHsl {
        let g = granularity as f32;
        let snap = |v: f32| (v * 100.0 / g).round() * g;

        QuantizedHsl {
            hue_degrees: (snap(self.h) * 3.6).rem_euclid(360.0),
            saturation: snap(self.s),
            lightness: snap(self.l),
        }
    }
}

/// An HSL colour snapped to the granularity grid, in renderable units:
/// hue in degrees (`[0, 360)`), saturation and lightness as percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizedHsl {
    pub hue_degrees: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl QuantizedHsl {
    /// Convert back to RGB for painting.
    pub fn to_rgb(self) -> Colour {
        use palette::{IntoColor, Srgb};

        let hsl = palette::Hsl::new(
            self.hue_degrees,
            self.saturation / 100.0,
            self.lightness / 100.0,
        );
        let rgb: Srgb<f32> = hsl.into_color();

        Colour::new(
            (rgb.red * 255.0).round() as u8,
            (rgb.green * 255.0).round() as u8,
            (rgb.blue * 255.0).round() as u8,
        )
    }
}

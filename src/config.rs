//! Render options and their construction.
//!
//! Options are merged once, up front: built-in defaults, then an
//! optional YAML options file, then explicit caller overrides. The
//! merged value is validated before a renderer is built and is
//! immutable for the duration of a pass.

use serde::Deserialize;

use crate::error::{MosaicError, Result};
use crate::render::SamplerKind;

/// Default block side in pixels.
pub const DEFAULT_BLOCKSIZE: u32 = 5;

/// Default granularity (palette coarseness).
pub const DEFAULT_GRANULARITY: u32 = 16;

/// Options for one mosaic render pass.
///
/// Deserializes from YAML with every field optional; unrecognized keys
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MosaicOptions {
    /// Pixel side of a mosaic block.
    pub blocksize: u32,

    /// Palette coarseness, `1..=100`. The higher, the fewer colours.
    pub granularity: u32,

    /// How a block's representative colour is extracted.
    pub sampler: SamplerKind,
}

impl Default for MosaicOptions {
    fn default() -> Self {
        Self {
            blocksize: DEFAULT_BLOCKSIZE,
            granularity: DEFAULT_GRANULARITY,
            sampler: SamplerKind::default(),
        }
    }
}

impl MosaicOptions {
    /// Set the block size.
    pub fn with_blocksize(mut self, blocksize: u32) -> Self {
        self.blocksize = blocksize;
        self
    }

    /// Set the granularity.
    pub fn with_granularity(mut self, granularity: u32) -> Self {
        self.granularity = granularity;
        self
    }

    /// Set the sampler.
    pub fn with_sampler(mut self, sampler: SamplerKind) -> Self {
        self.sampler = sampler;
        self
    }

    /// Parse options from YAML text, falling back to defaults for
    /// anything unspecified. An empty document is all defaults.
    pub fn from_yaml(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(source).map_err(|e| MosaicError::Config {
            message: format!("Failed to parse options: {}", e),
            help: Some("Expected YAML like `blocksize: 5` / `granularity: 16`".to_string()),
        })
    }

    /// Check the option ranges. Called by the renderer before any block
    /// processing.
    pub fn validate(&self) -> Result<()> {
        if self.blocksize == 0 {
            return Err(MosaicError::Config {
                message: "blocksize must be at least 1 pixel".to_string(),
                help: Some(format!("the default is {}", DEFAULT_BLOCKSIZE)),
            });
        }

        if self.granularity == 0 || self.granularity > 100 {
            return Err(MosaicError::Config {
                message: format!(
                    "granularity must be between 1 and 100, got {}",
                    self.granularity
                ),
                help: Some(format!("the default is {}", DEFAULT_GRANULARITY)),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let options = MosaicOptions::default();
        assert_eq!(options.blocksize, 5);
        assert_eq!(options.granularity, 16);
        assert_eq!(options.sampler, SamplerKind::BoxResize);
    }

    #[test]
    fn test_builders_override_defaults() {
        let options = MosaicOptions::default()
            .with_blocksize(8)
            .with_granularity(25)
            .with_sampler(SamplerKind::PixelAverage);

        assert_eq!(
            options,
            MosaicOptions {
                blocksize: 8,
                granularity: 25,
                sampler: SamplerKind::PixelAverage,
            }
        );
    }

    #[test]
    fn test_from_yaml_full() {
        let options = MosaicOptions::from_yaml(
            "blocksize: 10\ngranularity: 4\nsampler: pixel-average\n",
        )
        .unwrap();

        assert_eq!(options.blocksize, 10);
        assert_eq!(options.granularity, 4);
        assert_eq!(options.sampler, SamplerKind::PixelAverage);
    }

    #[test]
    fn test_from_yaml_partial_falls_back_to_defaults() {
        let options = MosaicOptions::from_yaml("granularity: 50\n").unwrap();
        assert_eq!(options.blocksize, DEFAULT_BLOCKSIZE);
        assert_eq!(options.granularity, 50);
        assert_eq!(options.sampler, SamplerKind::BoxResize);
    }

    #[test]
    fn test_from_yaml_unknown_keys_ignored() {
        let options =
            MosaicOptions::from_yaml("blocksize: 3\ndithering: floyd\nverbose: true\n").unwrap();
        assert_eq!(options.blocksize, 3);
        assert_eq!(options.granularity, DEFAULT_GRANULARITY);
    }

    #[test]
    fn test_from_yaml_empty_is_defaults() {
        assert_eq!(MosaicOptions::from_yaml("").unwrap(), MosaicOptions::default());
        assert_eq!(MosaicOptions::from_yaml("  \n").unwrap(), MosaicOptions::default());
        assert_eq!(MosaicOptions::from_yaml("{}").unwrap(), MosaicOptions::default());
    }

    #[test]
    fn test_from_yaml_malformed() {
        assert!(MosaicOptions::from_yaml("blocksize: [oops").is_err());
        assert!(MosaicOptions::from_yaml("blocksize: many").is_err());
    }

    #[test]
    fn test_validate_rejects_zero_blocksize() {
        let err = MosaicOptions::default().with_blocksize(0).validate().unwrap_err();
        assert!(matches!(err, MosaicError::Config { .. }));
    }

    #[test]
    fn test_validate_granularity_bounds() {
        assert!(MosaicOptions::default().with_granularity(0).validate().is_err());
        assert!(MosaicOptions::default().with_granularity(101).validate().is_err());
        assert!(MosaicOptions::default().with_granularity(1).validate().is_ok());
        assert!(MosaicOptions::default().with_granularity(100).validate().is_ok());
    }
}

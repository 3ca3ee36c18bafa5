//! Apply command implementation.
//!
//! Loads an image, renders the mosaic effect at the requested display
//! size, and writes the result as PNG.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use image::imageops::FilterType;
use image::RgbImage;

use crate::config::MosaicOptions;
use crate::error::{MosaicError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{write_png, MosaicRenderer, SamplerKind};

/// Render the 8-bit mosaic effect on an image
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Image to process
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file (defaults to `<input>.mosaic.png`)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Pixel side of a mosaic block
    #[arg(long)]
    pub blocksize: Option<u32>,

    /// Palette coarseness, 1-100 (higher gives fewer colours)
    #[arg(long)]
    pub granularity: Option<u32>,

    /// How block colours are sampled
    #[arg(long, value_enum)]
    pub sampler: Option<SamplerKind>,

    /// Render width (defaults to the image's natural width)
    #[arg(long)]
    pub width: Option<u32>,

    /// Render height (defaults to the image's natural height)
    #[arg(long)]
    pub height: Option<u32>,

    /// YAML options file; explicit flags override its values
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: ApplyArgs, printer: &Printer) -> Result<()> {
    let options = merge_options(
        args.options.as_deref(),
        args.blocksize,
        args.granularity,
        args.sampler,
    )?;
    let renderer = MosaicRenderer::new(options)?;

    let img = load_display_raster(&args.input, args.width, args.height)?;
    let display = display_path(&args.input);
    printer.status(
        "Rendering",
        &format!(
            "{} {}",
            display,
            printer.dim(&format!(
                "({}x{}, blocksize {}, granularity {})",
                img.width(),
                img.height(),
                options.blocksize,
                options.granularity
            ))
        ),
    );

    let mut sink = RgbImage::new(img.width(), img.height());
    let stats = renderer.render_into(&img, &mut sink)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.input));
    write_png(&sink, &output, args.scale)?;

    printer.status(
        "Finished",
        &format!(
            "{} -> {}",
            plural(stats.blocks, "block", "blocks"),
            display_path(&output)
        ),
    );

    Ok(())
}

/// Merge options: defaults, then the options file, then explicit flags.
fn merge_options(
    options_file: Option<&Path>,
    blocksize: Option<u32>,
    granularity: Option<u32>,
    sampler: Option<SamplerKind>,
) -> Result<MosaicOptions> {
    let mut options = match options_file {
        Some(path) => {
            let source = fs::read_to_string(path).map_err(|e| MosaicError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to read options file: {}", e),
            })?;
            MosaicOptions::from_yaml(&source)?
        }
        None => MosaicOptions::default(),
    };

    if let Some(blocksize) = blocksize {
        options = options.with_blocksize(blocksize);
    }
    if let Some(granularity) = granularity {
        options = options.with_granularity(granularity);
    }
    if let Some(sampler) = sampler {
        options = options.with_sampler(sampler);
    }

    Ok(options)
}

/// Load an image and bring it to its display size.
///
/// An unspecified dimension falls back to the image's natural size; a
/// requested one resizes the raster before the mosaic pass, the way the
/// effect follows an element's displayed size rather than the file's.
fn load_display_raster(path: &Path, width: Option<u32>, height: Option<u32>) -> Result<RgbImage> {
    let img = image::open(path)
        .map_err(|e| MosaicError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgb8();

    let target = (
        width.unwrap_or_else(|| img.width()),
        height.unwrap_or_else(|| img.height()),
    );
    if target.0 == 0 || target.1 == 0 {
        return Err(MosaicError::Config {
            message: "render dimensions must be positive".to_string(),
            help: Some("omit --width/--height to use the image's own size".to_string()),
        });
    }

    if target == img.dimensions() {
        Ok(img)
    } else {
        Ok(image::imageops::resize(
            &img,
            target.0,
            target.1,
            FilterType::Triangle,
        ))
    }
}

fn default_output(input: &Path) -> PathBuf {
    input.with_extension("mosaic.png")
}

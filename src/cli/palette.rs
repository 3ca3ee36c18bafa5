//! Palette report: the distinct quantized colours a mosaic would use.
//!
//! Granularity is the palette-size control; this command makes its
//! effect observable without writing an image.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::config::MosaicOptions;
use crate::error::{MosaicError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{MosaicRenderer, SamplerKind};

/// Report the quantized colours a mosaic would use
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Image to extract the mosaic palette from
    #[arg(required = true)]
    pub file: PathBuf,

    /// Maximum number of colours to output
    #[arg(long)]
    pub max: Option<usize>,

    /// Emit the palette as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Pixel side of a mosaic block
    #[arg(long)]
    pub blocksize: Option<u32>,

    /// Palette coarseness, 1-100 (higher gives fewer colours)
    #[arg(long)]
    pub granularity: Option<u32>,

    /// How block colours are sampled
    #[arg(long, value_enum)]
    pub sampler: Option<SamplerKind>,
}

#[derive(Serialize)]
struct PaletteEntry {
    colour: String,
    blocks: usize,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let mut options = MosaicOptions::default();
    if let Some(blocksize) = args.blocksize {
        options = options.with_blocksize(blocksize);
    }
    if let Some(granularity) = args.granularity {
        options = options.with_granularity(granularity);
    }
    if let Some(sampler) = args.sampler {
        options = options.with_sampler(sampler);
    }
    let renderer = MosaicRenderer::new(options)?;

    let img = image::open(&args.file)
        .map_err(|e| MosaicError::Io {
            path: args.file.clone(),
            message: e.to_string(),
        })?
        .to_rgb8();

    let mut colours = renderer.quantized_palette(&img)?;
    if let Some(max) = args.max {
        if colours.len() > max {
            printer.warning(
                "Truncated",
                &format!("to the {} most frequent", plural(max, "colour", "colours")),
            );
        }
        colours.truncate(max);
    }

    printer.status(
        "Sampled",
        &format!(
            "{} from {}",
            plural(colours.len(), "colour", "colours"),
            display_path(&args.file)
        ),
    );

    if args.json {
        let entries: Vec<PaletteEntry> = colours
            .iter()
            .map(|(colour, blocks)| PaletteEntry {
                colour: colour.to_string(),
                blocks: *blocks,
            })
            .collect();
        let json = serde_json::to_string_pretty(&entries).map_err(|e| MosaicError::Io {
            path: args.file.clone(),
            message: format!("Failed to encode palette JSON: {}", e),
        })?;
        println!("{}", json);
    } else {
        // Print palette lines to stdout
        for (i, (colour, _blocks)) in colours.iter().enumerate() {
            println!("$colour-{}: {}", i + 1, colour);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use image::RgbImage;
    use tempfile::tempdir;

    use super::*;

    fn two_tone_png(path: &std::path::Path) {
        // Left half red, right half black, in 5-pixel columns.
        let img = RgbImage::from_fn(20, 5, |x, _| {
            if x < 10 {
                image::Rgb([255, 0, 0])
            } else {
                image::Rgb([0, 0, 0])
            }
        });
        img.save(path).unwrap();
    }

    fn palette_args(file: PathBuf) -> PaletteArgs {
        PaletteArgs {
            file,
            max: None,
            json: false,
            blocksize: None,
            granularity: None,
            sampler: None,
        }
    }

    #[test]
    fn test_palette_runs_on_generated_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tones.png");
        two_tone_png(&path);

        let mut args = palette_args(path);
        args.blocksize = Some(5);
        args.granularity = Some(10);

        run(args, &Printer::new()).unwrap();
    }

    #[test]
    fn test_palette_json_and_max() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tones.png");
        two_tone_png(&path);

        let mut args = palette_args(path);
        args.json = true;
        args.max = Some(1);

        run(args, &Printer::new()).unwrap();
    }

    #[test]
    fn test_palette_missing_file() {
        let dir = tempdir().unwrap();
        let args = palette_args(dir.path().join("absent.png"));
        let err = run(args, &Printer::new()).unwrap_err();
        assert!(matches!(err, MosaicError::Io { .. }));
    }
}

pub mod apply;
pub mod completions;
pub mod palette;

use clap::{Parser, Subcommand};

/// mosaic8 - retro 8-bit mosaic renderer
#[derive(Parser, Debug)]
#[command(name = "mosaic8")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the 8-bit mosaic effect on an image
    Apply(apply::ApplyArgs),

    /// Report the quantized colours a mosaic would use
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

use clap::Parser;
use miette::Result;
use mosaic8::cli::{Cli, Commands};
use mosaic8::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Apply(args) => mosaic8::cli::apply::run(args, &printer)?,
        Commands::Palette(args) => mosaic8::cli::palette::run(args, &printer)?,
        Commands::Completions(args) => mosaic8::cli::completions::run(args)?,
    }

    Ok(())
}

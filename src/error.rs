use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mosaic8 operations
#[derive(Error, Diagnostic, Debug)]
pub enum MosaicError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mosaic8::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid options: {message}")]
    #[diagnostic(code(mosaic8::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unsupported surface: {message}")]
    #[diagnostic(code(mosaic8::unsupported))]
    Unsupported { message: String },

    #[error("Pixel read refused at block ({x}, {y}): {reason}")]
    #[diagnostic(
        code(mosaic8::sample),
        help("{completed} of {total} blocks were filled before the refusal; the output raster is incomplete")
    )]
    SampleRefused {
        x: u32,
        y: u32,
        completed: usize,
        total: usize,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, MosaicError>;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GifError {
    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid width '{0}'. Use a number or preset name.")]
    InvalidWidth(String),

    #[error("End time must be after start time (start: {start}s, end: {end}s)")]
    InvalidTimeRange { start: f64, end: f64 },

    #[error("ffmpeg is not installed or not in PATH")]
    EncoderMissing,

    #[error("Error generating palette: {0}")]
    PaletteGenerationFailed(String),

    #[error("Error creating GIF: {0}")]
    EncodeFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GifError>;

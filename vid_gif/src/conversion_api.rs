//! Conversion API module
//!
//! Top-level sequencing for one conversion run: validate the request,
//! derive the trim window, build the shared filter chain, then drive the two
//! encoder passes. The transient palette artifact lives exactly as long as
//! the run; it is removed on every exit path, success or failure.

use crate::encoder::EncoderBackend;
use crate::errors::{GifError, Result};
use crate::filters::FilterChain;
use crate::timestamp::{derive_window, parse_timestamp, TimeWindow};
use crate::width::{resolve_width, ResolvedWidth};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Validated user input for one conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConversionRequest {
    pub input: PathBuf,
    /// Destination path; defaults to the input's stem plus ".gif".
    pub output: Option<PathBuf>,
    /// Width token: pixel count or preset name. None means the default preset.
    pub width: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub fps: u32,
}

#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub output_path: PathBuf,
    pub output_size: u64,
}

/// Result of the pure validation stage; no subprocess has run yet.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub resolved_width: ResolvedWidth,
    pub window: TimeWindow,
    pub output_path: PathBuf,
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    PathBuf::from(format!("{}.gif", stem))
}

/// Validate a request without touching the encoder. Every rejection happens
/// here, before any external process starts.
pub fn validate(request: &ConversionRequest) -> Result<ValidatedRequest> {
    if !request.input.exists() {
        return Err(GifError::InputNotFound(request.input.clone()));
    }

    let resolved_width = resolve_width(request.width.as_deref())?;

    let start = request.start.as_deref().map(parse_timestamp).transpose()?;
    let end = request.end.as_deref().map(parse_timestamp).transpose()?;
    let window = derive_window(start, end)?;

    let output_path = request
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&request.input));

    Ok(ValidatedRequest {
        resolved_width,
        window,
        output_path,
    })
}

/// Run the full two-pass conversion against the given backend.
pub fn convert<B: EncoderBackend>(
    request: &ConversionRequest,
    backend: &B,
) -> Result<ConversionOutcome> {
    let validated = validate(request)?;

    if !backend.is_available() {
        return Err(GifError::EncoderMissing);
    }

    let filters = FilterChain::new(Some(validated.resolved_width.pixels()), request.fps);

    // Uniquely-scoped palette artifact; dropped (and removed) on every
    // failure path out of either pass.
    let palette = tempfile::Builder::new()
        .prefix("vid_gif_palette_")
        .suffix(".png")
        .tempfile()?;
    let palette_path = palette.path().to_path_buf();

    info!(
        input = %request.input.display(),
        output = %validated.output_path.display(),
        width = validated.resolved_width.pixels(),
        fps = request.fps,
        palette = %palette_path.display(),
        "Starting conversion"
    );

    println!("Generating color palette...");
    backend.generate_palette(
        &request.input,
        &validated.window,
        &filters.palette_pass(),
        &palette_path,
    )?;

    println!("Converting video to GIF...");
    backend.encode_with_palette(
        &request.input,
        &validated.window,
        &filters.encode_pass(),
        &palette_path,
        &validated.output_path,
    )?;

    if let Err(error) = palette.close() {
        warn!(%error, "Failed to remove palette artifact");
    }

    let output_size = fs::metadata(&validated.output_path)?.len();
    info!(
        output = %validated.output_path.display(),
        output_size,
        "Conversion finished"
    );

    Ok(ConversionOutcome {
        output_path: validated.output_path,
        output_size,
    })
}

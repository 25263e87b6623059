//! vid_gif - Video to GIF conversion
//!
//! Converts video clips to animated GIFs through a two-pass ffmpeg pipeline:
//! a palette-generation pass followed by a palette-mapped encode pass, both
//! driven by the same scale/fps filter chain.
//!
//! ```rust,ignore
//! use vid_gif::{convert, ConversionRequest, FfmpegEncoder};
//!
//! let request = ConversionRequest {
//!     input: "video.mp4".into(),
//!     fps: 10,
//!     ..Default::default()
//! };
//! let outcome = convert(&request, &FfmpegEncoder)?;
//! ```

pub mod conversion_api;
pub mod encoder;
pub mod errors;
pub mod filters;
pub mod timestamp;
pub mod width;

pub use conversion_api::{
    convert, validate, ConversionOutcome, ConversionRequest, ValidatedRequest,
};
pub use encoder::{EncoderBackend, FfmpegEncoder};
pub use errors::{GifError, Result};
pub use filters::FilterChain;
pub use timestamp::{derive_window, format_clock, parse_timestamp, TimeWindow};
pub use width::{preset_width, resolve_width, ResolvedWidth, DEFAULT_PRESET, WIDTH_PRESETS};

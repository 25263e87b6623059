//! Shared utilities for the vid_gif tools
//!
//! This crate provides common functionality used by the conversion CLI:
//! - Logging setup (tracing with rolling file output)
//! - FFprobe wrapper for media inspection
//! - Path sanitation for child-process arguments

pub mod ffprobe;
pub mod logging;
pub mod path_safety;

pub use ffprobe::{get_duration, is_ffprobe_available, probe_media, FFprobeError, MediaInfo};
pub use path_safety::safe_path_arg;

//! Encoder gateway - the boundary to the external ffmpeg binary.
//!
//! Each operation maps to one blocking process invocation. The gateway never
//! interprets encoder error text beyond pass/fail; captured stderr travels
//! upward unparsed.

use crate::errors::{GifError, Result};
use crate::timestamp::TimeWindow;
use shared_utils::safe_path_arg;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

pub trait EncoderBackend {
    /// Whether the encoder capability is present at all. Absence is a fatal
    /// precondition for every other operation.
    fn is_available(&self) -> bool;

    /// Best-effort duration probe; None is not fatal to the pipeline.
    fn probe_duration(&self, input: &Path) -> Option<f64>;

    /// First pass: render filtered frames to a palette image.
    fn generate_palette(
        &self,
        input: &Path,
        window: &TimeWindow,
        filter: &str,
        palette: &Path,
    ) -> Result<()>;

    /// Second pass: render filtered frames using the generated palette.
    fn encode_with_palette(
        &self,
        input: &Path,
        window: &TimeWindow,
        filter: &str,
        palette: &Path,
        output: &Path,
    ) -> Result<()>;
}

/// Production backend invoking the ffmpeg/ffprobe binaries found on PATH.
pub struct FfmpegEncoder;

impl FfmpegEncoder {
    fn input_args(input: &Path, window: &TimeWindow) -> Vec<String> {
        let mut args = vec!["-i".to_string(), safe_path_arg(input).into_owned()];
        if let Some(offset) = window.offset {
            args.push("-ss".to_string());
            args.push(offset.to_string());
        }
        if let Some(duration) = window.duration {
            args.push("-t".to_string());
            args.push(duration.to_string());
        }
        args
    }

    fn run(args: &[String]) -> std::result::Result<(), String> {
        info!(command = ?args, "Executing FFmpeg command");

        let output = Command::new("ffmpeg")
            .args(args)
            .output()
            .map_err(|e| format!("Failed to run ffmpeg: {}", e))?;

        if output.status.success() {
            debug!(
                stderr_output = %String::from_utf8_lossy(&output.stderr),
                "FFmpeg pass completed"
            );
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stderr.is_empty() {
                Err(format!(
                    "ffmpeg exited with code {:?}",
                    output.status.code()
                ))
            } else {
                Err(stderr)
            }
        }
    }
}

impl EncoderBackend for FfmpegEncoder {
    fn is_available(&self) -> bool {
        which::which("ffmpeg").is_ok()
    }

    fn probe_duration(&self, input: &Path) -> Option<f64> {
        shared_utils::get_duration(input)
    }

    fn generate_palette(
        &self,
        input: &Path,
        window: &TimeWindow,
        filter: &str,
        palette: &Path,
    ) -> Result<()> {
        let mut args = Self::input_args(input, window);
        args.extend([
            "-vf".to_string(),
            filter.to_string(),
            "-y".to_string(),
            safe_path_arg(palette).into_owned(),
        ]);

        Self::run(&args).map_err(GifError::PaletteGenerationFailed)
    }

    fn encode_with_palette(
        &self,
        input: &Path,
        window: &TimeWindow,
        filter: &str,
        palette: &Path,
        output: &Path,
    ) -> Result<()> {
        let mut args = Self::input_args(input, window);
        args.extend([
            "-i".to_string(),
            safe_path_arg(palette).into_owned(),
            "-lavfi".to_string(),
            filter.to_string(),
            "-y".to_string(),
            safe_path_arg(output).into_owned(),
        ]);

        Self::run(&args).map_err(GifError::EncodeFailed)
    }
}

//! FFprobe wrapper module
//!
//! Shared FFprobe functionality for media inspection, used by the vid_gif CLI
//! for the info command and for best-effort duration probing.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use std::process::Command;

#[derive(Debug)]
pub enum FFprobeError {
    ToolNotFound(String),
    ExecutionFailed(String),
    ParseError(String),
    IoError(io::Error),
}

impl std::fmt::Display for FFprobeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FFprobeError::ToolNotFound(s) => write!(f, "Tool not found: {}", s),
            FFprobeError::ExecutionFailed(s) => write!(f, "FFprobe failed: {}", s),
            FFprobeError::ParseError(s) => write!(f, "Parse error: {}", s),
            FFprobeError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for FFprobeError {}

impl From<io::Error> for FFprobeError {
    fn from(e: io::Error) -> Self {
        FFprobeError::IoError(e)
    }
}

/// Slim media description extracted from ffprobe's JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaInfo {
    pub format_name: String,
    pub duration: f64,
    pub size: u64,
    pub width: u32,
    pub height: u32,
    pub frame_rate: f64,
}

pub fn is_ffprobe_available() -> bool {
    which::which("ffprobe").is_ok()
}

pub fn probe_media(path: &Path) -> Result<MediaInfo, FFprobeError> {
    if !is_ffprobe_available() {
        return Err(FFprobeError::ToolNotFound(
            "ffprobe not found. Install with: brew install ffmpeg".to_string(),
        ));
    }

    if !path.is_file() {
        return Err(FFprobeError::ExecutionFailed(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let path_str = path.to_str().ok_or_else(|| {
        FFprobeError::ExecutionFailed(format!("Invalid path encoding: {}", path.display()))
    })?;

    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_format",
            "-show_streams",
            "--",
            path_str,
        ])
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let error_msg = if stderr.trim().is_empty() {
            format!(
                "ffprobe failed to analyze file: {} (exit code: {:?})",
                path.display(),
                output.status.code()
            )
        } else {
            format!("ffprobe error for '{}': {}", path.display(), stderr.trim())
        };
        return Err(FFprobeError::ExecutionFailed(error_msg));
    }

    let json_str = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value =
        serde_json::from_str(&json_str).map_err(|e| FFprobeError::ParseError(e.to_string()))?;

    let format = &json["format"];
    let format_name = format["format_name"]
        .as_str()
        .unwrap_or("unknown")
        .to_string();
    let duration = format["duration"]
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0);
    let size = format["size"]
        .as_str()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);

    let streams = json["streams"]
        .as_array()
        .ok_or_else(|| FFprobeError::ParseError("No streams found".to_string()))?;

    let video_stream = streams
        .iter()
        .find(|s| s["codec_type"].as_str() == Some("video"))
        .ok_or_else(|| FFprobeError::ParseError("No video stream found".to_string()))?;

    let width = video_stream["width"].as_u64().unwrap_or(0) as u32;
    let height = video_stream["height"].as_u64().unwrap_or(0) as u32;
    let frame_rate = parse_frame_rate(video_stream["r_frame_rate"].as_str().unwrap_or("0/1"));

    Ok(MediaInfo {
        format_name,
        duration,
        size,
        width,
        height,
        frame_rate,
    })
}

/// Best-effort duration probe. Returns None when ffprobe is missing, fails,
/// or prints something unparseable.
pub fn get_duration(path: &Path) -> Option<f64> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "quiet",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
            "--",
            path.to_str()?,
        ])
        .output()
        .ok()?;

    if output.status.success() {
        String::from_utf8_lossy(&output.stdout)
            .trim()
            .parse::<f64>()
            .ok()
    } else {
        None
    }
}

const FALLBACK_FRAME_RATE: f64 = 24.0;

pub fn parse_frame_rate(s: &str) -> f64 {
    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 2 {
            let num = parts[0].parse::<f64>().unwrap_or(0.0);
            let den = parts[1].parse::<f64>().unwrap_or(0.0);
            if den > 0.0 {
                let rate = num / den;
                if rate > 0.0 {
                    return rate;
                }
            }
        }
    }
    match s.parse::<f64>() {
        Ok(v) if v > 0.0 => v,
        _ => FALLBACK_FRAME_RATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_rate() {
        let cases: &[(&str, f64, f64)] = &[
            ("30/1", 30.0, 0.001),
            ("24/1", 24.0, 0.001),
            ("25/1", 25.0, 0.001),
            ("30000/1001", 30000.0 / 1001.0, 0.0001),
            ("24000/1001", 24000.0 / 1001.0, 0.0001),
            ("24", 24.0, 0.001),
            ("29.97", 29.97, 0.01),
        ];

        for (input, expected, tolerance) in cases {
            let result = parse_frame_rate(input);
            assert!(
                (result - expected).abs() < *tolerance,
                "parse_frame_rate({:?}): expected {}, got {}",
                input,
                expected,
                result
            );
        }
    }

    #[test]
    fn test_parse_frame_rate_edge_cases() {
        assert_eq!(parse_frame_rate("30/0"), FALLBACK_FRAME_RATE);
        assert_eq!(parse_frame_rate("invalid"), FALLBACK_FRAME_RATE);
        assert_eq!(parse_frame_rate(""), FALLBACK_FRAME_RATE);
        assert_eq!(parse_frame_rate("30/1/extra"), FALLBACK_FRAME_RATE);
    }

    #[test]
    fn test_probe_media_missing_file() {
        if !is_ffprobe_available() {
            return;
        }
        let err = probe_media(Path::new("/nonexistent/clip.mp4")).unwrap_err();
        assert!(matches!(err, FFprobeError::ExecutionFailed(_)));
    }
}

//! Logging module
//!
//! Unified logging setup built on the tracing framework:
//! - log output to a rolling file in the system temp directory
//! - stderr layer for interactive diagnostics
//! - retention of a bounded number of old log files
//!
//! # Examples
//!
//! ```no_run
//! use shared_utils::logging::{init_logging, LogConfig};
//! use tracing::info;
//!
//! init_logging("vid_gif", LogConfig::default()).expect("Failed to initialize logging");
//! info!("Program started");
//! ```

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log directory (defaults to the system temp directory)
    pub log_dir: PathBuf,
    /// Number of old log files to keep
    pub max_files: usize,
    /// Default log level when RUST_LOG is not set
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: std::env::temp_dir(),
            max_files: 5,
            level: Level::INFO,
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.log_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_max_files(mut self, count: usize) -> Self {
        self.max_files = count;
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

/// Initialize the logging system.
///
/// Sets up tracing-subscriber with a daily-rotated file appender named
/// `{program_name}.log` in the configured directory, plus a stderr layer.
/// The environment filter honours RUST_LOG when set.
pub fn init_logging(program_name: &str, config: LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", config.log_dir))?;

    let log_file_name = format!("{}.log", program_name);
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.log_dir, &log_file_name);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", program_name, config.level)));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    tracing::info!(
        program = program_name,
        log_dir = ?config.log_dir,
        log_file = log_file_name,
        level = ?config.level,
        "Logging system initialized"
    );

    cleanup_old_logs(&config.log_dir, program_name, config.max_files)?;

    Ok(())
}

/// Remove old log files, keeping only the most recent `max_files`.
fn cleanup_old_logs(log_dir: &Path, program_name: &str, max_files: usize) -> Result<()> {
    use std::fs;

    let entries = fs::read_dir(log_dir)
        .with_context(|| format!("Failed to read log directory: {:?}", log_dir))?;

    let mut log_files: Vec<(PathBuf, std::time::SystemTime)> = Vec::new();

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(file_name) = path.file_name() {
            let file_name_str = file_name.to_string_lossy();
            if file_name_str.starts_with(program_name) && file_name_str.contains(".log") {
                if let Ok(metadata) = fs::metadata(&path) {
                    if let Ok(modified) = metadata.modified() {
                        log_files.push((path, modified));
                    }
                }
            }
        }
    }

    if log_files.len() <= max_files {
        return Ok(());
    }

    // Newest first; delete the tail
    log_files.sort_by(|a, b| b.1.cmp(&a.1));
    for (path, _) in log_files.into_iter().skip(max_files) {
        let _ = fs::remove_file(&path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new()
            .with_log_dir("/tmp/vid_gif_test_logs")
            .with_max_files(3)
            .with_level(Level::DEBUG);

        assert_eq!(config.log_dir, PathBuf::from("/tmp/vid_gif_test_logs"));
        assert_eq!(config.max_files, 3);
        assert_eq!(config.level, Level::DEBUG);
    }

    #[test]
    fn test_cleanup_old_logs_keeps_recent() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..4 {
            let path = dir.path().join(format!("prog.log.2026-01-0{}", i + 1));
            std::fs::write(&path, "x").unwrap();
        }

        cleanup_old_logs(dir.path(), "prog", 2).unwrap();

        let remaining = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(remaining, 2);
    }
}

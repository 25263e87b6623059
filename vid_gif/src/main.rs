use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

use vid_gif::{
    convert, resolve_width, ConversionRequest, EncoderBackend, FfmpegEncoder, GifError,
    ResolvedWidth,
};

#[derive(Parser)]
#[command(name = "vid-gif")]
#[command(version, about = "Convert video files to animated GIFs", long_about = None)]
#[command(after_help = "Examples:
  vid-gif video.mp4
  vid-gif video.mp4 -w 480
  vid-gif video.mp4 -w medium
  vid-gif video.mp4 --start 10 --end 20
  vid-gif video.mp4 --start 0:30 --end 1:15
  vid-gif video.mp4 -o output.gif -w small --fps 15

Recommended widths:
  tiny=240px, small=320px, medium=480px, large=640px, xlarge=800px, hd=1280px")]
struct Cli {
    /// Input video file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output GIF file (default: input_name.gif)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output width in pixels or preset (tiny/small/medium/large/xlarge/hd).
    /// Height scales proportionally.
    #[arg(short, long)]
    width: Option<String>,

    /// Start timestamp (seconds or HH:MM:SS format)
    #[arg(short, long)]
    start: Option<String>,

    /// End timestamp (seconds or HH:MM:SS format)
    #[arg(short, long)]
    end: Option<String>,

    /// Frames per second (lower = smaller file)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Show video information without converting
    #[arg(long)]
    list_info: bool,

    /// Print video information as JSON (with --list-info)
    #[arg(long, requires = "list_info")]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let _ = shared_utils::logging::init_logging(
        "vid_gif",
        shared_utils::logging::LogConfig::default().with_level(level),
    );

    let backend = FfmpegEncoder;

    if !backend.is_available() {
        eprintln!("❌ Error: ffmpeg is not installed or not in PATH.");
        eprintln!("Please install ffmpeg: https://ffmpeg.org/download.html");
        std::process::exit(1);
    }

    if cli.list_info {
        return print_info(&backend, &cli);
    }

    // Width resolution also runs inside convert(); it is pure.
    match resolve_width(cli.width.as_deref()) {
        Ok(ResolvedWidth::Preset { name, pixels }) if cli.width.is_some() => {
            println!("Using preset width: {} ({}px)", name, pixels);
        }
        Ok(ResolvedWidth::Preset { name, pixels }) => {
            println!("Using default width: {} ({}px)", name, pixels);
        }
        Ok(ResolvedWidth::Custom { pixels }) => {
            println!("Using custom width: {}px", pixels);
        }
        Err(error) => {
            eprintln!("❌ Error: {}", error);
            std::process::exit(1);
        }
    }

    let request = ConversionRequest {
        input: cli.input,
        output: cli.output,
        width: cli.width,
        start: cli.start,
        end: cli.end,
        fps: cli.fps,
    };

    match convert(&request, &backend) {
        Ok(outcome) => {
            let size_mb = outcome.output_size as f64 / (1024.0 * 1024.0);
            println!(
                "✓ Successfully created: {} ({:.2} MB)",
                outcome.output_path.display(),
                size_mb
            );
            Ok(())
        }
        Err(error) => {
            eprintln!("❌ Error: {}", error);
            if matches!(error, GifError::InvalidTimestamp(_)) {
                eprintln!("Timestamps should be in seconds (30) or HH:MM:SS (0:00:30) format");
            }
            std::process::exit(1);
        }
    }
}

fn print_info(backend: &FfmpegEncoder, cli: &Cli) -> anyhow::Result<()> {
    if cli.json {
        match shared_utils::probe_media(&cli.input) {
            Ok(info) => {
                println!("{}", serde_json::to_string_pretty(&info)?);
                Ok(())
            }
            Err(error) => {
                eprintln!("❌ Error: {}", error);
                std::process::exit(1);
            }
        }
    } else {
        match backend.probe_duration(&cli.input) {
            Some(duration) => {
                println!("Video duration: {}", vid_gif::format_clock(duration));
            }
            None => println!("Could not determine video duration."),
        }
        Ok(())
    }
}

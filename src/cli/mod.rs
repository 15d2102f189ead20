//! CLI module for vidmark
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

pub mod args;
pub mod commands;

pub use args::WatermarkArgs;

/// vidmark
///
/// Watermark all videos in the specified directory.
#[derive(Parser, Debug)]
#[command(name = "vidmark")]
#[command(about = "Watermark all videos in specified directory")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, env = "VIDMARK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Settings file (default: ./vidmark.toml when present)
    #[arg(long, env = "VIDMARK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub watermark: WatermarkArgs,
}

//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments of a watermark run
#[derive(Args, Debug, Clone)]
pub struct WatermarkArgs {
    /// Path to the input directory
    pub input_dir: PathBuf,

    /// Path to the output directory (created if absent)
    pub output_dir: PathBuf,

    /// Do not remove original files
    #[arg(short = 'l', long = "leave-originals")]
    pub leave_originals: bool,

    /// Watermark text
    #[arg(long, env = "VIDMARK_TEXT")]
    pub text: Option<String>,

    /// Font file used to render the watermark
    #[arg(long, env = "VIDMARK_FONT")]
    pub font: Option<PathBuf>,
}

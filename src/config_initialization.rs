//! Configuration initialization and hierarchy management

use std::path::{Path, PathBuf};

use crate::adapters::toml_config::{FileConfig, TomlConfigAdapter};
use crate::adapters::tracing_log::LogLevel;
use crate::app::container::ToolPaths;
use crate::cli::Cli;
use crate::domain::errors::DomainError;
use crate::domain::model::{BatchRequest, DEFAULT_WATERMARK_TEXT, FONT_NAME};

/// Log level when nothing else is configured
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Warn;

/// Fully resolved settings of one run
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub text: String,
    pub font_path: PathBuf,
    pub tools: ToolPaths,
    pub log_level: LogLevel,
    pub log_json: bool,
    /// Settings file that contributed, if any
    pub config_file: Option<PathBuf>,
}

impl AppConfig {
    /// Merge settings following precedence: CLI > Env > File > Defaults
    ///
    /// CLI flags and `VIDMARK_*` variables arrive merged through clap.
    pub fn resolve(cli: &Cli, file: Option<(PathBuf, FileConfig)>) -> Result<Self, DomainError> {
        let (config_file, file) = match file {
            Some((path, config)) => (Some(path), config),
            None => (None, FileConfig::default()),
        };
        let config_dir = config_file
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf);

        let text = cli
            .watermark
            .text
            .clone()
            .or(file.watermark.text)
            .unwrap_or_else(|| DEFAULT_WATERMARK_TEXT.to_string());

        // Relative font paths in a settings file are relative to that file
        let file_font = file.watermark.font.map(|font| match &config_dir {
            Some(dir) if font.is_relative() => dir.join(font),
            _ => font,
        });
        let font_path = cli
            .watermark
            .font
            .clone()
            .or(file_font)
            .unwrap_or_else(default_font_path);

        let defaults = ToolPaths::default();
        let tools = ToolPaths {
            ffmpeg: file.tools.ffmpeg.unwrap_or(defaults.ffmpeg),
            ffprobe: file.tools.ffprobe.unwrap_or(defaults.ffprobe),
        };

        let log_level = match cli.log_level.as_deref().or(file.logging.level.as_deref()) {
            Some(level) => LogLevel::parse(level)?,
            None => DEFAULT_LOG_LEVEL,
        };
        let log_json = cli.log_json || file.logging.json.unwrap_or(false);

        Ok(Self {
            text,
            font_path,
            tools,
            log_level,
            log_json,
            config_file,
        })
    }

    /// Build the batch request for this run
    pub fn batch_request(&self, cli: &Cli) -> BatchRequest {
        BatchRequest {
            input_dir: cli.watermark.input_dir.clone(),
            output_dir: cli.watermark.output_dir.clone(),
            keep_originals: cli.watermark.leave_originals,
            text: self.text.clone(),
            font_path: self.font_path.clone(),
        }
    }
}

/// Load the settings file (if any) and resolve the full configuration
pub fn initialize_configuration_hierarchy(cli: &Cli) -> Result<AppConfig, DomainError> {
    let file = TomlConfigAdapter::load(cli.config.as_deref())?;
    AppConfig::resolve(cli, file)
}

/// The font ships next to the executable
pub fn default_font_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(FONT_NAME)))
        .unwrap_or_else(|| PathBuf::from(FONT_NAME))
}

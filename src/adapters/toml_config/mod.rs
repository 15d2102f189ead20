// TOML config adapter - Optional settings file

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::errors::*;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "vidmark.toml";

/// `[watermark]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatermarkSection {
    pub text: Option<String>,
    pub font: Option<PathBuf>,
}

/// `[tools]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    pub ffmpeg: Option<String>,
    pub ffprobe: Option<String>,
}

/// `[logging]` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub json: Option<bool>,
}

/// Contents of a settings file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub watermark: WatermarkSection,
    #[serde(default)]
    pub tools: ToolsSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Load an explicit config file, or `vidmark.toml` from the working
    /// directory when present
    pub fn load(explicit: Option<&Path>) -> Result<Option<(PathBuf, FileConfig)>, DomainError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok(None);
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            DomainError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::parse(&content).map_err(|e| match e {
            DomainError::Config(msg) => DomainError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;

        Ok(Some((path, config)))
    }

    /// Deserialize config from TOML string
    pub fn parse(toml_content: &str) -> Result<FileConfig, DomainError> {
        toml::from_str(toml_content)
            .map_err(|e| DomainError::Config(format!("Failed to parse TOML config: {}", e)))
    }
}

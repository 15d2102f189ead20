//! FFprobe adapter for media file probing
//!
//! Runs `ffprobe` with JSON output and reduces the result to a stream list.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// FFprobe JSON output format.
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    index: usize,
    #[serde(default)]
    codec_type: Option<String>,
    #[serde(default)]
    codec_name: Option<String>,
}

/// FFprobe-based probe adapter
#[derive(Debug, Clone)]
pub struct FFprobeAdapter {
    binary: String,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter for the given executable name or path
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn locate(&self) -> Result<PathBuf, DomainError> {
        which::which(&self.binary).map_err(|_| DomainError::ToolNotFound(self.binary.clone()))
    }

    /// Parse the JSON printed by `ffprobe -show_streams`
    pub fn parse_report(json: &[u8]) -> Result<ProbeReport, serde_json::Error> {
        let output: FfprobeOutput = serde_json::from_slice(json)?;
        let streams = output
            .streams
            .into_iter()
            .map(|s| StreamSummary {
                index: s.index,
                kind: StreamKind::from_codec_type(s.codec_type.as_deref().unwrap_or_default()),
                codec: s.codec_name,
            })
            .collect();
        Ok(ProbeReport::new(streams))
    }
}

impl Default for FFprobeAdapter {
    fn default() -> Self {
        Self::new("ffprobe")
    }
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe_streams(&self, file_path: &Path) -> Result<ProbeReport, DomainError> {
        let binary = self.locate()?;
        debug!(binary = %binary.display(), path = %file_path.display(), "Probing streams");

        let output = Command::new(&binary)
            .args(["-v", "quiet", "-print_format", "json", "-show_streams"])
            .arg(file_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| DomainError::ProbeFailed {
                path: file_path.to_path_buf(),
                message: format!("cannot run {}: {}", binary.display(), e),
            })?;

        if !output.status.success() {
            return Err(DomainError::ProbeFailed {
                path: file_path.to_path_buf(),
                message: format!(
                    "ffprobe exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        let report = Self::parse_report(&output.stdout).map_err(|e| DomainError::ProbeFailed {
            path: file_path.to_path_buf(),
            message: format!("unreadable ffprobe output: {}", e),
        })?;
        debug!(
            streams = report.streams.len(),
            audio = report.audio_stream_count(),
            "Probe complete"
        );
        Ok(report)
    }
}

//! FFmpeg execution adapter
//!
//! Turns a [`TranscodeSpec`] into one `ffmpeg` invocation and waits for it.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Label of the watermarked video pad inside the filter graph
const MARKED_PAD: &str = "marked";

/// FFmpeg-based execution adapter
#[derive(Debug, Clone)]
pub struct FFmpegAdapter {
    binary: String,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter for the given executable name or path
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn locate(&self) -> Result<PathBuf, DomainError> {
        which::which(&self.binary).map_err(|_| DomainError::ToolNotFound(self.binary.clone()))
    }

    /// Build the argument list for a spec
    pub fn build_args(spec: &TranscodeSpec) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-hide_banner".into(), "-nostdin".into()];
        args.push(if spec.overwrite { "-y" } else { "-n" }.into());

        args.push("-i".into());
        args.push(spec.source.clone().into_os_string());

        args.push("-filter_complex".into());
        args.push(format!("[0:v]{}[{}]", spec.video_filter, MARKED_PAD).into());
        args.push("-map".into());
        args.push(format!("[{}]", MARKED_PAD).into());

        match spec.audio {
            AudioPolicy::Passthrough => {
                args.extend(["-map", "0:a", "-c:a", "copy"].map(OsString::from));
            }
            AudioPolicy::Drop => args.push("-an".into()),
        }

        args.push("-f".into());
        args.push(spec.format.into());
        args.push(spec.destination.clone().into_os_string());
        args
    }
}

impl Default for FFmpegAdapter {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

#[async_trait]
impl TranscodePort for FFmpegAdapter {
    async fn transcode(&self, spec: &TranscodeSpec) -> Result<(), DomainError> {
        let binary = self.locate()?;
        let args = Self::build_args(spec);
        debug!(binary = %binary.display(), ?args, "Running ffmpeg");

        // Output is captured so the console only shows our own progress lines
        let output = Command::new(&binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| DomainError::TranscodeFailed {
                path: spec.source.clone(),
                message: format!("cannot run {}: {}", binary.display(), e),
            })?;

        if !output.status.success() {
            return Err(DomainError::TranscodeFailed {
                path: spec.source.clone(),
                message: format!(
                    "ffmpeg exited with {}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(())
    }
}

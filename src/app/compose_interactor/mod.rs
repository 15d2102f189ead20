// Compose interactor - Builds the watermark transcode for one video

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::FilterRules;
use crate::ports::*;

/// Interactor turning a [`Video`] into a [`TranscodeSpec`]
pub struct ComposeInteractor {
    probe_port: Arc<dyn ProbePort>,
    fs_port: Arc<dyn FsPort>,
    style: WatermarkStyle,
}

impl ComposeInteractor {
    /// Create new compose interactor with injected ports
    pub fn new(probe_port: Arc<dyn ProbePort>, fs_port: Arc<dyn FsPort>) -> Self {
        Self {
            probe_port,
            fs_port,
            style: WatermarkStyle::default(),
        }
    }

    /// Compose the watermark transcode for `video`
    ///
    /// The font is checked first, then the text, and only then is the source
    /// probed, so asset problems surface before any external tool runs.
    pub async fn compose(
        &self,
        video: &Video,
        text: &str,
        font_path: &Path,
    ) -> Result<TranscodeSpec, DomainError> {
        if !self.fs_port.file_exists(font_path).await? {
            return Err(DomainError::FontNotFound(font_path.display().to_string()));
        }
        if text.is_empty() {
            return Err(DomainError::EmptyText);
        }

        let report = self.probe_port.probe_streams(video.source()).await?;
        let audio = if report.has_audio() {
            AudioPolicy::Passthrough
        } else {
            AudioPolicy::Drop
        };
        debug!(
            source = %video.source().display(),
            audio_streams = report.audio_stream_count(),
            ?audio,
            "Composed watermark"
        );

        Ok(TranscodeSpec {
            source: video.source().to_path_buf(),
            destination: video.destination().to_path_buf(),
            video_filter: FilterRules::drawtext(text, font_path, &self.style),
            audio,
            format: "mp4",
            overwrite: true,
        })
    }
}

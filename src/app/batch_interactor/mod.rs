// Batch interactor - Orchestrates watermarking of a whole directory

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::app::compose_interactor::ComposeInteractor;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Interactor for the batch watermark use case
pub struct BatchInteractor {
    classify_port: Arc<dyn ClassifyPort>,
    transcode_port: Arc<dyn TranscodePort>,
    fs_port: Arc<dyn FsPort>,
    report_port: Arc<dyn ReportPort>,
    composer: Arc<ComposeInteractor>,
}

impl BatchInteractor {
    /// Create new batch interactor with injected ports
    pub fn new(
        classify_port: Arc<dyn ClassifyPort>,
        transcode_port: Arc<dyn TranscodePort>,
        fs_port: Arc<dyn FsPort>,
        report_port: Arc<dyn ReportPort>,
        composer: Arc<ComposeInteractor>,
    ) -> Self {
        Self {
            classify_port,
            transcode_port,
            fs_port,
            report_port,
            composer,
        }
    }

    /// Watermark every video of `request.input_dir`
    ///
    /// Items are handled one after another; the first error aborts the run
    /// and leaves earlier items processed and later ones untouched.
    pub async fn execute(&self, request: &BatchRequest) -> Result<BatchOutcome, DomainError> {
        if !self.fs_port.directory_exists(&request.input_dir).await? {
            return Err(DomainError::InputDirNotFound(request.input_dir.clone()));
        }
        let input_dir = self.fs_port.resolve_path(&request.input_dir).await?;

        let entries = self.fs_port.list_entries(&input_dir).await?;
        if entries.is_empty() {
            info!(input = %input_dir.display(), "Input directory is empty");
            self.report_port.empty_directory();
            return Ok(BatchOutcome::EmptyDirectory);
        }

        let output_dir = self.fs_port.resolve_path(&request.output_dir).await?;
        self.fs_port.create_directory(&output_dir).await?;

        self.report_port.discovery_started();
        let videos = self.discover_videos(&entries, &output_dir).await?;
        let total = videos.len();
        self.report_port.discovery_finished(total);
        info!(
            input = %input_dir.display(),
            entries = entries.len(),
            videos = total,
            "Discovery finished"
        );

        if videos.is_empty() {
            self.report_port.no_videos();
            return Ok(BatchOutcome::NoVideos);
        }

        let mut processed = Vec::with_capacity(total);
        for (index, video) in videos.iter().enumerate() {
            processed.push(self.process(index + 1, total, video, request).await?);
        }

        self.report_port.done();
        info!(processed = processed.len(), "Batch complete");
        Ok(BatchOutcome::Completed { processed })
    }

    /// Keep the non-directory entries whose content sniffs as video
    async fn discover_videos(
        &self,
        entries: &[DirEntryInfo],
        output_dir: &Path,
    ) -> Result<Vec<Video>, DomainError> {
        let mut videos = Vec::new();
        for entry in entries.iter().filter(|e| !e.is_dir) {
            let video = Video::new(&entry.path, output_dir)?;
            let category = self.classify_port.classify(video.source()).await?;
            debug!(path = %entry.path.display(), ?category, "Classified entry");
            if category.is_video() {
                videos.push(video);
            }
        }
        Ok(videos)
    }

    async fn process(
        &self,
        index: usize,
        total: usize,
        video: &Video,
        request: &BatchRequest,
    ) -> Result<ProcessedVideo, DomainError> {
        let state = VideoState::Pending.advance(VideoState::Processing)?;
        debug!(source = %video.source().display(), %state, "Video state changed");
        self.report_port.item_started(index, total, video);

        let spec = self
            .composer
            .compose(video, &request.text, &request.font_path)
            .await?;
        self.transcode_port.transcode(&spec).await?;

        // Only a finished transcode may lead to removing its source
        let source_removed = if request.keep_originals {
            false
        } else {
            self.fs_port.delete_file(video.source()).await?;
            true
        };

        let state = state.advance(VideoState::Done)?;
        debug!(source = %video.source().display(), %state, source_removed, "Video state changed");
        self.report_port.item_finished();

        Ok(ProcessedVideo {
            source: video.source().to_path_buf(),
            destination: video.destination().to_path_buf(),
            source_removed,
        })
    }
}

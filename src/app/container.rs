use std::sync::Arc;

use crate::adapters::{
    ConsoleReportAdapter, FFmpegAdapter, FFprobeAdapter, FsLocalAdapter, InferMimeAdapter,
};
use crate::app::{batch_interactor::BatchInteractor, compose_interactor::ComposeInteractor};
use crate::ports::{ClassifyPort, FsPort, ProbePort, ReportPort, TranscodePort};

pub trait AppContainer: Send + Sync {
    fn batch_interactor(&self) -> Arc<BatchInteractor>;
}

/// Names or paths of the external media tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub ffmpeg: String,
    pub ffprobe: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
        }
    }
}

pub struct DefaultAppContainer {
    batch_interactor: Arc<BatchInteractor>,
}

impl DefaultAppContainer {
    pub fn new(tools: &ToolPaths) -> Self {
        let classify_port = Arc::new(InferMimeAdapter::new());
        let probe_port = Arc::new(FFprobeAdapter::new(tools.ffprobe.clone()));
        let transcode_port = Arc::new(FFmpegAdapter::new(tools.ffmpeg.clone()));
        let fs_port = Arc::new(FsLocalAdapter::new());
        let report_port = Arc::new(ConsoleReportAdapter::new());

        let compose_interactor = Arc::new(ComposeInteractor::new(
            Arc::clone(&probe_port) as Arc<dyn ProbePort>,
            Arc::clone(&fs_port) as Arc<dyn FsPort>,
        ));

        let batch_interactor = Arc::new(BatchInteractor::new(
            Arc::clone(&classify_port) as Arc<dyn ClassifyPort>,
            Arc::clone(&transcode_port) as Arc<dyn TranscodePort>,
            Arc::clone(&fs_port) as Arc<dyn FsPort>,
            Arc::clone(&report_port) as Arc<dyn ReportPort>,
            compose_interactor,
        ));

        Self { batch_interactor }
    }
}

impl Default for DefaultAppContainer {
    fn default() -> Self {
        Self::new(&ToolPaths::default())
    }
}

impl AppContainer for DefaultAppContainer {
    fn batch_interactor(&self) -> Arc<BatchInteractor> {
        Arc::clone(&self.batch_interactor)
    }
}

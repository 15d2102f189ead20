// Fake port implementations shared by interactor tests

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Classifies by file name instead of content
pub struct FakeClassifier {
    videos: HashSet<String>,
}

impl FakeClassifier {
    pub fn videos(names: &[&str]) -> Self {
        Self {
            videos: names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

#[async_trait]
impl ClassifyPort for FakeClassifier {
    async fn sniff_mime(&self, file_path: &Path) -> Result<String, DomainError> {
        if self.videos.contains(&file_name(file_path)) {
            Ok("video/mp4".to_string())
        } else {
            Ok("text/plain".to_string())
        }
    }
}

/// Reports an audio stream for the listed file names
pub struct FakeProbe {
    with_audio: HashSet<String>,
    fail: bool,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl FakeProbe {
    pub fn with_audio(names: &[&str]) -> Self {
        Self {
            with_audio: names.iter().map(|n| n.to_string()).collect(),
            fail: false,
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_audio(&[])
        }
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<PathBuf>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl ProbePort for FakeProbe {
    async fn probe_streams(&self, file_path: &Path) -> Result<ProbeReport, DomainError> {
        self.calls.lock().unwrap().push(file_path.to_path_buf());
        if self.fail {
            return Err(DomainError::ProbeFailed {
                path: file_path.to_path_buf(),
                message: "invalid data".to_string(),
            });
        }

        let mut streams = vec![StreamSummary {
            index: 0,
            kind: StreamKind::Video,
            codec: Some("h264".to_string()),
        }];
        if self.with_audio.contains(&file_name(file_path)) {
            streams.push(StreamSummary {
                index: 1,
                kind: StreamKind::Audio,
                codec: Some("aac".to_string()),
            });
        }
        Ok(ProbeReport::new(streams))
    }
}

/// Writes a marker file instead of running ffmpeg
#[derive(Default)]
pub struct FakeTranscoder {
    fail_on: Option<String>,
    specs: Arc<Mutex<Vec<TranscodeSpec>>>,
}

impl FakeTranscoder {
    pub fn failing_on(name: &str) -> Self {
        Self {
            fail_on: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn specs(&self) -> Arc<Mutex<Vec<TranscodeSpec>>> {
        Arc::clone(&self.specs)
    }
}

#[async_trait]
impl TranscodePort for FakeTranscoder {
    async fn transcode(&self, spec: &TranscodeSpec) -> Result<(), DomainError> {
        self.specs.lock().unwrap().push(spec.clone());
        if self.fail_on.as_deref() == Some(file_name(&spec.source).as_str()) {
            return Err(DomainError::TranscodeFailed {
                path: spec.source.clone(),
                message: "encoder exploded".to_string(),
            });
        }
        std::fs::write(&spec.destination, b"marked")
            .map_err(|e| DomainError::FsFail(e.to_string()))
    }
}

/// Collects progress text the way the console would show it
#[derive(Default)]
pub struct RecordingReporter {
    text: Arc<Mutex<String>>,
}

impl RecordingReporter {
    pub fn text(&self) -> Arc<Mutex<String>> {
        Arc::clone(&self.text)
    }

    fn push(&self, s: &str) {
        self.text.lock().unwrap().push_str(s);
    }
}

impl ReportPort for RecordingReporter {
    fn empty_directory(&self) {
        self.push("The directory is empty, nothing to do.\n");
    }

    fn discovery_started(&self) {
        self.push("Videos found... ");
    }

    fn discovery_finished(&self, total: usize) {
        self.push(&format!("{}\n", total));
    }

    fn no_videos(&self) {
        self.push("No videos found, nothing to do.\n");
    }

    fn item_started(&self, index: usize, total: usize, video: &Video) {
        self.push(&format!(
            "({}/{}) {} => {}... ",
            index,
            total,
            video.source_name(),
            video.destination_name()
        ));
    }

    fn item_finished(&self) {
        self.push("OK\n");
    }

    fn done(&self) {
        self.push("Done!\n");
    }
}

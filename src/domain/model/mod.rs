// Domain models - Core types and data structures

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::rules::NamingRules;

/// File name of the bundled watermark font
pub const FONT_NAME: &str = "OpenSans-BoldItalic.ttf";

/// Watermark text used when none is configured
pub const DEFAULT_WATERMARK_TEXT: &str = "put_it_here";

/// Coarse media category derived from a sniffed MIME type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaCategory {
    Video,
    Audio,
    Image,
    Other,
}

impl MediaCategory {
    /// Categorise a MIME string; anything mentioning `video` is a video
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.to_ascii_lowercase();
        if mime.contains("video") {
            MediaCategory::Video
        } else if mime.starts_with("audio/") {
            MediaCategory::Audio
        } else if mime.starts_with("image/") {
            MediaCategory::Image
        } else {
            MediaCategory::Other
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaCategory::Video)
    }
}

/// Kind of an elementary stream reported by a probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamKind {
    Video,
    Audio,
    Subtitle,
    Data,
    Other(String),
}

impl StreamKind {
    /// Map an ffprobe `codec_type` value
    pub fn from_codec_type(codec_type: &str) -> Self {
        match codec_type {
            "video" => StreamKind::Video,
            "audio" => StreamKind::Audio,
            "subtitle" => StreamKind::Subtitle,
            "data" => StreamKind::Data,
            other => StreamKind::Other(other.to_string()),
        }
    }
}

/// One stream of a probed file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamSummary {
    pub index: usize,
    pub kind: StreamKind,
    pub codec: Option<String>,
}

/// Metadata-only view of a media file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub streams: Vec<StreamSummary>,
}

impl ProbeReport {
    pub fn new(streams: Vec<StreamSummary>) -> Self {
        Self { streams }
    }

    /// Check whether at least one audio stream is present
    pub fn has_audio(&self) -> bool {
        self.streams.iter().any(|s| s.kind == StreamKind::Audio)
    }

    pub fn audio_stream_count(&self) -> usize {
        self.streams
            .iter()
            .filter(|s| s.kind == StreamKind::Audio)
            .count()
    }
}

/// Fixed look of the burned-in text
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkStyle {
    pub font_size: u32,
    pub font_color: &'static str,
    pub alpha: f32,
    pub boxed: bool,
    pub x: &'static str,
    pub y: &'static str,
}

impl Default for WatermarkStyle {
    fn default() -> Self {
        Self {
            font_size: 40,
            font_color: "white",
            alpha: 0.15,
            boxed: false,
            x: "(w-text_w)/2",
            y: "(h-text_h)/2",
        }
    }
}

/// What to do with the source audio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioPolicy {
    /// Remux every audio stream without re-encoding
    Passthrough,
    /// Write no audio at all
    Drop,
}

/// Everything the transcoder needs for one file
#[derive(Debug, Clone, PartialEq)]
pub struct TranscodeSpec {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Rendered `drawtext` filter, already escaped for a filter graph
    pub video_filter: String,
    pub audio: AudioPolicy,
    pub format: &'static str,
    pub overwrite: bool,
}

/// A video accepted for watermarking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    source: PathBuf,
    destination: PathBuf,
}

impl Video {
    /// Create a video with a random destination name inside `output_dir`
    pub fn new(source: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        Self::with_name(source, output_dir, None)
    }

    /// Create a video, optionally forcing the destination file name
    pub fn with_name(
        source: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
        name: Option<&str>,
    ) -> Result<Self, DomainError> {
        let source = source.as_ref();
        if !source.is_file() {
            return Err(DomainError::SourceNotFound(source.to_path_buf()));
        }
        let source = absolute(source)?;
        let output_dir = absolute(output_dir.as_ref())?;

        let name = match name {
            Some(name) => {
                validate_plain_name(name)?;
                name.to_string()
            }
            None => NamingRules::random_basename(source.extension()),
        };

        Ok(Self {
            destination: output_dir.join(name),
            source,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn source_name(&self) -> String {
        display_name(&self.source)
    }

    pub fn destination_name(&self) -> String {
        display_name(&self.destination)
    }
}

fn absolute(path: &Path) -> Result<PathBuf, DomainError> {
    std::path::absolute(path)
        .map_err(|e| DomainError::FsFail(format!("Cannot resolve {}: {}", path.display(), e)))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// A destination name must stay a single entry of the output directory.
fn validate_plain_name(name: &str) -> Result<(), DomainError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(DomainError::BadArgs(format!(
            "Output name must be a plain file name: {:?}",
            name
        ))),
    }
}

/// Per-video lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoState {
    Pending,
    Processing,
    Done,
}

impl VideoState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoState::Pending => "pending",
            VideoState::Processing => "processing",
            VideoState::Done => "done",
        }
    }

    /// Move one step forward; states can never be skipped or revisited
    pub fn advance(self, to: VideoState) -> Result<VideoState, DomainError> {
        match (self, to) {
            (VideoState::Pending, VideoState::Processing)
            | (VideoState::Processing, VideoState::Done) => Ok(to),
            _ => Err(DomainError::InvalidTransition {
                from: self.as_str(),
                to: to.as_str(),
            }),
        }
    }
}

impl fmt::Display for VideoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one batch run
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub keep_originals: bool,
    pub text: String,
    pub font_path: PathBuf,
}

/// A video that went all the way to `Done`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedVideo {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub source_removed: bool,
}

/// How a batch run ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BatchOutcome {
    /// The input directory had no entries at all
    EmptyDirectory,
    /// Entries existed but none sniffed as video
    NoVideos,
    Completed { processed: Vec<ProcessedVideo> },
}

impl BatchOutcome {
    pub fn processed(&self) -> &[ProcessedVideo] {
        match self {
            BatchOutcome::Completed { processed } => processed,
            _ => &[],
        }
    }
}

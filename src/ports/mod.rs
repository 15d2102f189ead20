// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for content-based media type detection
#[async_trait]
pub trait ClassifyPort: Send + Sync {
    /// Sniff the MIME type of a file from its bytes
    async fn sniff_mime(&self, file_path: &Path) -> Result<String, DomainError>;

    /// Classify a file into a coarse media category
    async fn classify(&self, file_path: &Path) -> Result<MediaCategory, DomainError> {
        let mime = self.sniff_mime(file_path).await?;
        Ok(MediaCategory::from_mime(&mime))
    }
}

/// Port for metadata-only media inspection
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// List the streams of a media file
    async fn probe_streams(&self, file_path: &Path) -> Result<ProbeReport, DomainError>;
}

/// Port for running one watermark transcode
#[async_trait]
pub trait TranscodePort: Send + Sync {
    /// Render `spec.destination` from `spec.source`, blocking until done
    async fn transcode(&self, spec: &TranscodeSpec) -> Result<(), DomainError>;
}

/// Directory entry as seen by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check if directory exists
    async fn directory_exists(&self, dir_path: &Path) -> Result<bool, DomainError>;

    /// Check if a regular file exists
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError>;

    /// List direct children of a directory, sorted by file name
    async fn list_entries(&self, dir_path: &Path) -> Result<Vec<DirEntryInfo>, DomainError>;

    /// Create directory (including parent directories)
    async fn create_directory(&self, dir_path: &Path) -> Result<(), DomainError>;

    /// Delete file
    async fn delete_file(&self, file_path: &Path) -> Result<(), DomainError>;

    /// Resolve relative path to absolute path
    async fn resolve_path(&self, file_path: &Path) -> Result<PathBuf, DomainError>;
}

/// Port for user-facing progress lines
pub trait ReportPort: Send + Sync {
    /// Input directory had no entries
    fn empty_directory(&self);

    /// Scanning is about to start
    fn discovery_started(&self);

    /// Scanning finished with `total` videos
    fn discovery_finished(&self, total: usize);

    /// No entry sniffed as video
    fn no_videos(&self);

    /// Item `index` of `total` is being watermarked
    fn item_started(&self, index: usize, total: usize, video: &Video);

    /// The current item reached `Done`
    fn item_finished(&self);

    /// Whole batch finished
    fn done(&self);
}

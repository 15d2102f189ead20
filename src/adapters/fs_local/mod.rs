// Local filesystem adapter - Directory scanning and file housekeeping

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use walkdir::WalkDir;

use crate::domain::errors::*;
use crate::ports::*;

/// Filesystem adapter backed by the local disk
#[derive(Debug, Default, Clone)]
pub struct FsLocalAdapter;

impl FsLocalAdapter {
    /// Create new local filesystem adapter
    pub fn new() -> Self {
        Self
    }

    fn scan(dir_path: &Path) -> Result<Vec<DirEntryInfo>, DomainError> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(dir_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                DomainError::FsFail(format!("Failed to list {}: {}", dir_path.display(), e))
            })?;
            // Follow symlinks so a link to a directory is treated as one
            let is_dir = entry.path().is_dir();
            entries.push(DirEntryInfo {
                path: entry.into_path(),
                is_dir,
            });
        }
        Ok(entries)
    }
}

#[async_trait]
impl FsPort for FsLocalAdapter {
    async fn directory_exists(&self, dir_path: &Path) -> Result<bool, DomainError> {
        match fs::metadata(dir_path).await {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::FsFail(format!(
                "Failed to stat {}: {}",
                dir_path.display(),
                e
            ))),
        }
    }

    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError> {
        Ok(fs::metadata(file_path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false))
    }

    async fn list_entries(&self, dir_path: &Path) -> Result<Vec<DirEntryInfo>, DomainError> {
        let dir_path = dir_path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::scan(&dir_path))
            .await
            .map_err(|e| DomainError::FsFail(format!("Directory scan aborted: {}", e)))?
    }

    async fn create_directory(&self, dir_path: &Path) -> Result<(), DomainError> {
        fs::create_dir_all(dir_path)
            .await
            .map_err(|e| DomainError::OutputDirUnavailable {
                path: dir_path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    async fn delete_file(&self, file_path: &Path) -> Result<(), DomainError> {
        fs::remove_file(file_path).await.map_err(|e| {
            DomainError::FsFail(format!("Failed to delete {}: {}", file_path.display(), e))
        })
    }

    async fn resolve_path(&self, file_path: &Path) -> Result<PathBuf, DomainError> {
        std::path::absolute(file_path).map_err(|e| {
            DomainError::FsFail(format!("Cannot resolve {}: {}", file_path.display(), e))
        })
    }
}

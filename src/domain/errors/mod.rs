// Domain errors - Error types for the domain layer

use std::path::PathBuf;

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug)]
pub enum DomainError {
    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),

    /// Input directory missing or not a directory
    #[error("{} does not exist!", .0.display())]
    InputDirNotFound(PathBuf),

    /// Output directory could not be created
    #[error("Cannot create output directory {}: {reason}", .path.display())]
    OutputDirUnavailable { path: PathBuf, reason: String },

    /// Source file vanished or is not a regular file
    #[error("{} does not exist!", .0.display())]
    SourceNotFound(PathBuf),

    /// Watermark font asset missing
    #[error("Font {0} is not found!")]
    FontNotFound(String),

    /// Watermark text is empty
    #[error("Text should not be empty!")]
    EmptyText,

    /// External binary could not be located
    #[error("{0} executable not found in PATH")]
    ToolNotFound(String),

    /// Probe of a media file failed
    #[error("Failed to probe {}: {message}", .path.display())]
    ProbeFailed { path: PathBuf, message: String },

    /// Transcode of a media file failed
    #[error("Failed to watermark {}: {message}", .path.display())]
    TranscodeFailed { path: PathBuf, message: String },

    /// File system operation failed
    #[error("File system error: {0}")]
    FsFail(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Illegal lifecycle transition
    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: &'static str, to: &'static str },
}

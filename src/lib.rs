//! vidmark Library
//!
//! Batch watermarking of video directories. Media work is delegated to
//! `ffmpeg`/`ffprobe`; this crate discovers videos by content sniffing,
//! names the outputs and drives one transcode per file.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{BatchOutcome, BatchRequest, ProcessedVideo, TranscodeSpec, Video};

// Adapters - External system implementations

pub mod console_report;
pub mod exec_ffmpeg;
pub mod fs_local;
pub mod mime_infer;
pub mod probe_ffprobe;
pub mod toml_config;
pub mod tracing_log;

// Re-export adapters
pub use console_report::ConsoleReportAdapter;
pub use exec_ffmpeg::FFmpegAdapter;
pub use fs_local::FsLocalAdapter;
pub use mime_infer::InferMimeAdapter;
pub use probe_ffprobe::FFprobeAdapter;
pub use toml_config::TomlConfigAdapter;
pub use tracing_log::TracingLogAdapter;

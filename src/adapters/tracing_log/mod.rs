// Tracing log adapter - Structured logging using tracing crate

use tracing_subscriber::EnvFilter;

use crate::domain::errors::*;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse log level from string
    pub fn parse(level_str: &str) -> Result<Self, DomainError> {
        match level_str.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(DomainError::Config(format!(
                "Invalid log level: {}. Valid levels: trace, debug, info, warn, error",
                level_str
            ))),
        }
    }

    /// Directive understood by `EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Tracing log adapter
pub struct TracingLogAdapter;

impl TracingLogAdapter {
    /// Install the global subscriber; `RUST_LOG` takes precedence over `level`
    ///
    /// Logs go to stderr so stdout carries only progress lines.
    pub fn init(level: LogLevel, json: bool) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.as_directive()));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false);

        // A subscriber may already be installed (tests); keep the first one
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    }
}

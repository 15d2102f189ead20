//! vidmark
//!
//! Burns a translucent text watermark into every video of a directory,
//! writing the results to another directory and removing the originals
//! unless asked to keep them.
//!
//! # Usage
//!
//! ```bash
//! vidmark ./incoming ./marked
//! vidmark ./incoming ./marked -l --text "draft copy"
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use vidmark_cli::adapters::TracingLogAdapter;
use vidmark_cli::cli::{commands, Cli};
use vidmark_cli::config_initialization::initialize_configuration_hierarchy;

/// Main entry point for the vidmark application
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    let config =
        initialize_configuration_hierarchy(&cli).context("Failed to load configuration")?;

    // Initialize logging
    TracingLogAdapter::init(config.log_level, config.log_json);
    if let Some(path) = &config.config_file {
        info!("Loaded configuration from {}", path.display());
    }

    commands::watermark(&cli, &config).await?;
    Ok(())
}

//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::app::container::{AppContainer, DefaultAppContainer};
use crate::cli::Cli;
use crate::config_initialization::AppConfig;
use crate::domain::model::BatchOutcome;

/// Execute a watermark run
pub async fn watermark(cli: &Cli, config: &AppConfig) -> Result<BatchOutcome> {
    let request = config.batch_request(cli);
    info!("Input: {}", request.input_dir.display());
    info!("Output: {}", request.output_dir.display());
    info!("Font: {}", request.font_path.display());
    info!("Keep originals: {}", request.keep_originals);

    let container = DefaultAppContainer::new(&config.tools);
    let outcome = container
        .batch_interactor()
        .execute(&request)
        .await
        .context("Watermarking aborted")?;

    match &outcome {
        BatchOutcome::EmptyDirectory => info!("Nothing to do: input directory is empty"),
        BatchOutcome::NoVideos => info!("Nothing to do: no videos found"),
        BatchOutcome::Completed { processed } => {
            info!("Watermarked {} video(s)", processed.len())
        }
    }
    Ok(outcome)
}

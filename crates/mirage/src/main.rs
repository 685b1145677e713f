//! Mirage CLI binary.
//!
//! - Serve the gallery API
//! - Walk a running gallery's feed and summarize it
//! - Inspect the tour a seed produces

use anyhow::Context;
use clap::Parser;
use mirage::cli::{Cli, Commands, check_media, render_permutation, serve_gallery};
use mirage_server::{MirageConfig, init_logging, shutdown_logging};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Credentials usually live in .env during development
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = MirageConfig::load().context("Failed to load configuration")?;
    let logging = if cli.verbose {
        config.logging().clone().with_level("debug".to_string())
    } else {
        config.logging().clone()
    };
    init_logging(&logging).context("Failed to initialize logging")?;

    let outcome = dispatch(cli.command, config).await;
    shutdown_logging();
    outcome
}

async fn dispatch(command: Commands, config: MirageConfig) -> anyhow::Result<()> {
    match command {
        Commands::Serve { bind } => {
            serve_gallery(config, bind).await.context("Gallery server failed")?;
        }

        Commands::CheckMedia {
            url,
            order,
            timeout,
        } => {
            let public_url = config.bucket().public_url();
            check_media(&url, public_url, order, Duration::from_secs(timeout))
                .await
                .with_context(|| format!("Failed to walk feed at {}", url))?;
        }

        Commands::Shuffle { seed, keys } => {
            print!("{}", render_permutation(seed, &keys));
        }
    }

    Ok(())
}

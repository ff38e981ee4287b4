// Rider Export - Spare riders to CSV
// Copyright (c) 2025 Rider Export Contributors
// Licensed under the MIT License

use anyhow::Context;
use clap::Parser;
use rider_export::cli::Cli;
use rider_export::log_run_failure;
use rider_export::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let logging_config = cli.logging_config()?;
    let _guard = init_logging(&logging_config).context("Failed to initialize logging")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Rider export");

    // Handled failures are logged and still end the process normally
    match cli.run().await {
        Ok(summary) => println!("Data successfully saved to {}", summary.file_name()),
        Err(e) => log_run_failure!(&e),
    }

    Ok(())
}

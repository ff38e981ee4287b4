//! CLI interface and argument parsing
//!
//! Every flag is optional and overrides the matching `RIDERS_*` environment
//! variable. The API token is only read from the environment.

use crate::config::{load_config, load_logging_config, LoggingConfig, RiderExportConfig};
use crate::core::export::{ExportCoordinator, ExportSummary};
use crate::domain::{ExportError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Export Spare riders to a dated CSV report
#[derive(Parser, Debug)]
#[command(name = "rider-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Directory receiving riders_<YYYY-MM-DD>.csv
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Directory receiving fetch_riders_log.log
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Disable the log file and log to the console only
    #[arg(long)]
    pub no_log_file: bool,

    /// Riders endpoint URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Records requested per page
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl Cli {
    /// Logging settings from the environment with CLI overrides applied
    pub fn logging_config(&self) -> Result<LoggingConfig> {
        let mut logging = load_logging_config()?;
        self.apply_logging_overrides(&mut logging);
        logging
            .validate()
            .map_err(|e| ExportError::Configuration(format!("Configuration validation failed: {e}")))?;
        Ok(logging)
    }

    /// Full configuration from the environment with CLI overrides applied
    ///
    /// # Errors
    ///
    /// Fails before any network activity if the token is missing or an
    /// override is invalid.
    pub fn export_config(&self) -> Result<RiderExportConfig> {
        let mut config = load_config()?;
        self.apply_overrides(&mut config);
        config
            .validate()
            .map_err(|e| ExportError::Configuration(format!("Configuration validation failed: {e}")))?;
        Ok(config)
    }

    /// Apply CLI overrides to a loaded configuration
    pub fn apply_overrides(&self, config: &mut RiderExportConfig) {
        if let Some(base_url) = &self.base_url {
            tracing::debug!(base_url = %base_url, "Overriding base URL from CLI");
            config.api.base_url = base_url.clone();
        }
        if let Some(page_size) = self.page_size {
            tracing::debug!(page_size, "Overriding page size from CLI");
            config.api.page_size = page_size;
        }
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
        self.apply_logging_overrides(&mut config.logging);
    }

    fn apply_logging_overrides(&self, logging: &mut LoggingConfig) {
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(dir) = &self.log_dir {
            logging.directory = dir.clone();
        }
        if self.no_log_file {
            logging.file_enabled = false;
        }
    }

    /// Run one export
    pub async fn run(&self) -> Result<ExportSummary> {
        tracing::info!("Starting to fetch rider data...");
        let config = self.export_config()?;
        let coordinator = ExportCoordinator::new(config)?;
        coordinator.execute_export().await
    }
}

// Rider Export - Spare riders to CSV
// Copyright (c) 2025 Rider Export Contributors
// Licensed under the MIT License

//! # Rider Export
//!
//! Retrieves rider records from the Spare riders REST API and writes the
//! selected fields into a dated CSV report.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Pagination, transformation, export orchestration
//! - [`adapters`] - Rider API integration
//! - [`domain`] - Rider models, report rows and errors
//! - [`config`] - Environment-driven configuration
//! - [`logging`] - Console and file logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rider_export::config::load_config;
//! use rider_export::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config()?;
//!     let coordinator = ExportCoordinator::new(config)?;
//!     let summary = coordinator.execute_export().await?;
//!
//!     println!("Wrote {} riders to {}", summary.rows_written, summary.file_name());
//!     Ok(())
//! }
//! ```
//!
//! ## Data Quality
//!
//! Riders without a `metadata` mapping are skipped with a warning. Riders
//! whose composed mailing address is empty are still written, also with a
//! warning.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

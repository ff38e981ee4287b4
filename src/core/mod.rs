//! Core business logic for the rider export.
//!
//! # Modules
//!
//! - [`fetch`] - Pagination over a rider source
//! - [`transform`] - Rider to report-row mapping
//! - [`export`] - Run orchestration, CSV writing and summary
//!
//! # Example
//!
//! ```rust,no_run
//! use rider_export::config::load_config;
//! use rider_export::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let coordinator = ExportCoordinator::new(config)?;
//! let summary = coordinator.execute_export().await?;
//!
//! println!("Data successfully saved to {}", summary.file_name());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod fetch;
pub mod transform;

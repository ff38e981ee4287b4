//! External system integrations.
//!
//! - [`sparelabs`] - Spare rider REST API
//!
//! Adapters isolate external dependencies behind traits so the pipeline can
//! be exercised with in-memory implementations.
//!
//! ```rust,no_run
//! use rider_export::adapters::sparelabs::{RiderSource, SpareLabsClient};
//! use rider_export::config::{secret_string, ApiConfig};
//!
//! # async fn example() -> rider_export::domain::Result<()> {
//! let api = ApiConfig::new(secret_string("token".to_string()));
//! let client = SpareLabsClient::new(&api)?;
//! let page = client.fetch_page(50, 0).await?;
//! # Ok(())
//! # }
//! ```

pub mod sparelabs;

//! Configuration management for the rider export.
//!
//! Configuration comes from the process environment, optionally seeded from
//! a `.env` file by the binary before loading.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rider_export::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let _ = dotenvy::dotenv();
//! let config = load_config()?;
//! println!("Rider API: {}", config.api.base_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SPARELABS_API_TOKEN` | required |
//! | `RIDERS_API_BASE_URL` | `https://api.sparelabs.com/v1/riders` |
//! | `RIDERS_PAGE_SIZE` | `50` |
//! | `RIDERS_TIMEOUT_SECONDS` | `30` |
//! | `RIDERS_OUTPUT_DIR` | `.` |
//! | `RIDERS_LOG_DIR` | `.` |
//! | `RIDERS_LOG_LEVEL` | `info` |

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{
    load_config, load_config_from, load_logging_config, load_logging_config_from, TOKEN_ENV_VAR,
};
pub use schema::{ApiConfig, LoggingConfig, OutputConfig, RiderExportConfig};
pub use secret::{secret_string, SecretString, SecretValue};

//! Domain models and types for the rider export.
//!
//! The domain layer provides:
//! - **Rider models** ([`Rider`], [`RiderMetadata`]) decoded from the rider API
//! - **Report rows** ([`RiderRow`]) in fixed CSV column order
//! - **Error types** ([`ExportError`], [`ApiError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ExportError>`]:
//!
//! ```rust
//! use rider_export::domain::{ExportError, Result};
//!
//! fn example(token: Option<String>) -> Result<String> {
//!     token.ok_or_else(|| ExportError::Configuration("API token is missing".to_string()))
//! }
//! ```

pub mod errors;
pub mod result;
pub mod rider;

// Re-export commonly used types for convenience
pub use errors::{ApiError, ExportError};
pub use result::Result;
pub use rider::{Rider, RiderMetadata, RiderRow, COLUMNS};

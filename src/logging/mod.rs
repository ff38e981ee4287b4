//! Logging and observability
//!
//! The subscriber is installed once in `main`; everything else logs through
//! the `tracing` macros.
//!
//! ```no_run
//! use rider_export::logging::init_logging;
//! use rider_export::config::LoggingConfig;
//!
//! let _guard = init_logging(&LoggingConfig::default()).expect("Failed to initialize logging");
//! tracing::info!("Starting to fetch rider data...");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a failed run, separating transport failures from everything else
///
/// # Example
///
/// ```no_run
/// use rider_export::log_run_failure;
/// use rider_export::domain::ExportError;
///
/// let error = ExportError::Configuration("API token is missing".to_string());
/// log_run_failure!(&error);
/// ```
#[macro_export]
macro_rules! log_run_failure {
    ($error:expr) => {{
        let error: &$crate::domain::ExportError = $error;
        if error.is_transport() {
            tracing::error!(error_kind = "transport", "Error fetching riders data: {}", error);
        } else {
            tracing::error!(error_kind = "other", "An error occurred: {}", error);
        }
    }};
}

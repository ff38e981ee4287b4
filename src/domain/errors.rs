//! Domain error types
//!
//! This module defines the error hierarchy for the rider export.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main export error type
///
/// This is the primary error type used throughout the application.
/// The run orchestrator distinguishes transport failures ([`ExportError::Api`])
/// from every other class when reporting a failed run.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Configuration-related errors (missing token, invalid overrides)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rider API errors
    #[error("Rider API error: {0}")]
    Api(#[from] ApiError),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl ExportError {
    /// Whether this error came from the network/transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, ExportError::Api(_))
    }
}

/// Rider API errors
///
/// Errors that occur when talking to the rider REST endpoint.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to reach the server or read its response
    #[error("Failed to connect to rider API: {0}")]
    ConnectionFailed(String),

    /// Server answered with a non-success status
    #[error("Request failed: {status} - {body}")]
    RequestFailed { status: u16, body: String },

    /// Response body could not be decoded
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err.to_string())
    }
}

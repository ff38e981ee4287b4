//! Result type alias for the rider export

use super::errors::ExportError;

/// Result type alias for export operations
///
/// # Examples
///
/// ```
/// use rider_export::domain::result::Result;
/// use rider_export::domain::errors::ExportError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ExportError::Configuration("API token is missing".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExportError>;

//! Configuration schema definitions
//!
//! Defines the configuration structs for the rider export with defaults and
//! validation.

use super::secret::SecretString;
use secrecy::ExposeSecret;
use std::path::PathBuf;

/// Rider API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.sparelabs.com/v1/riders";

/// Records requested per page
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// HTTP request timeout
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Log file written alongside console output
pub const DEFAULT_LOG_FILE_NAME: &str = "fetch_riders_log.log";

/// Root configuration structure
#[derive(Debug, Clone)]
pub struct RiderExportConfig {
    /// Rider API connection
    pub api: ApiConfig,

    /// Report output
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl RiderExportConfig {
    /// Build a configuration with defaults around the given token
    pub fn new(token: SecretString) -> Self {
        Self {
            api: ApiConfig::new(token),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), String> {
        self.api.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Rider API connection settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Endpoint URL (without query string)
    pub base_url: String,

    /// Bearer token
    pub token: SecretString,

    /// Records requested per page (`limit`)
    pub page_size: usize,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl ApiConfig {
    /// API settings with default endpoint, page size and timeout
    pub fn new(token: SecretString) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token,
            page_size: DEFAULT_PAGE_SIZE,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Validate API configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.token.expose_secret().is_blank() {
            return Err("API token cannot be empty".to_string());
        }

        let url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid base_url '{}': {e}", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "base_url must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.page_size == 0 {
            return Err("page_size must be greater than 0".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("timeout_seconds must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory receiving `riders_<date>.csv`
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Write a log file in addition to the console
    pub file_enabled: bool,

    /// Directory holding the log file
    pub directory: PathBuf,

    /// Log file name
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: true,
            directory: PathBuf::from("."),
            file_name: DEFAULT_LOG_FILE_NAME.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }

        if self.file_enabled && self.file_name.trim().is_empty() {
            return Err("Log file name cannot be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    fn sample_config() -> RiderExportConfig {
        RiderExportConfig::new(secret_string("token".to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = sample_config();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.page_size, 50);
        assert_eq!(config.output.directory, PathBuf::from("."));
        assert_eq!(config.logging.file_name, "fetch_riders_log.log");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_blank_token() {
        let config = RiderExportConfig::new(secret_string("  ".to_string()));
        assert!(config.validate().unwrap_err().contains("token"));
    }

    #[test]
    fn test_validate_base_url() {
        let mut config = sample_config();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "ftp://api.example.com/riders".to_string();
        assert!(config.validate().unwrap_err().contains("http"));
    }

    #[test]
    fn test_validate_page_size_and_timeout() {
        let mut config = sample_config();
        config.api.page_size = 0;
        assert!(config.validate().is_err());

        let mut config = sample_config();
        config.api.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_log_level() {
        let mut config = sample_config();
        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());

        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }
}

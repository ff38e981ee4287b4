//! Configuration loader reading the process environment
//!
//! The only required setting is the API token. Everything else has a default
//! that can be overridden with a `RIDERS_*` variable.

use super::schema::{LoggingConfig, RiderExportConfig};
use super::secret::secret_string;
use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable holding the API bearer token
pub const TOKEN_ENV_VAR: &str = "SPARELABS_API_TOKEN";

pub const BASE_URL_ENV_VAR: &str = "RIDERS_API_BASE_URL";
pub const PAGE_SIZE_ENV_VAR: &str = "RIDERS_PAGE_SIZE";
pub const TIMEOUT_ENV_VAR: &str = "RIDERS_TIMEOUT_SECONDS";
pub const OUTPUT_DIR_ENV_VAR: &str = "RIDERS_OUTPUT_DIR";
pub const LOG_DIR_ENV_VAR: &str = "RIDERS_LOG_DIR";
pub const LOG_LEVEL_ENV_VAR: &str = "RIDERS_LOG_LEVEL";

/// Loads configuration from the process environment
///
/// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
///
/// # Errors
///
/// Returns [`ExportError::Configuration`] if the token is missing or an
/// override does not parse or validate.
///
/// # Examples
///
/// ```no_run
/// use rider_export::config::load_config;
///
/// let config = load_config().expect("SPARELABS_API_TOKEN must be set");
/// ```
pub fn load_config() -> Result<RiderExportConfig> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Loads configuration through an arbitrary key lookup
///
/// Empty values are treated as unset.
pub fn load_config_from<F>(lookup: F) -> Result<RiderExportConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let token = get(TOKEN_ENV_VAR).ok_or_else(|| {
        ExportError::Configuration(format!(
            "API token is missing, set {TOKEN_ENV_VAR} in the environment or the .env file"
        ))
    })?;

    let mut config = RiderExportConfig::new(secret_string(token));
    config.logging = logging_from(&get);

    if let Some(val) = get(BASE_URL_ENV_VAR) {
        config.api.base_url = val;
    }
    if let Some(val) = get(PAGE_SIZE_ENV_VAR) {
        config.api.page_size = parse_var(PAGE_SIZE_ENV_VAR, &val)?;
    }
    if let Some(val) = get(TIMEOUT_ENV_VAR) {
        config.api.timeout_seconds = parse_var(TIMEOUT_ENV_VAR, &val)?;
    }
    if let Some(val) = get(OUTPUT_DIR_ENV_VAR) {
        config.output.directory = PathBuf::from(val);
    }

    config.validate().map_err(|e| {
        ExportError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Loads only the logging settings from the process environment
///
/// Needs no token, so logging can be up before the rest of the
/// configuration is known to be valid.
pub fn load_logging_config() -> Result<LoggingConfig> {
    load_logging_config_from(|key| std::env::var(key).ok())
}

/// Loads only the logging settings through an arbitrary key lookup
pub fn load_logging_config_from<F>(lookup: F) -> Result<LoggingConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let logging = logging_from(&|key: &str| lookup(key).filter(|value| !value.trim().is_empty()));
    logging
        .validate()
        .map_err(|e| ExportError::Configuration(format!("Configuration validation failed: {e}")))?;
    Ok(logging)
}

fn logging_from(get: &dyn Fn(&str) -> Option<String>) -> LoggingConfig {
    let mut logging = LoggingConfig::default();
    if let Some(val) = get(LOG_DIR_ENV_VAR) {
        logging.directory = PathBuf::from(val);
    }
    if let Some(val) = get(LOG_LEVEL_ENV_VAR) {
        logging.level = val;
    }
    logging
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        ExportError::Configuration(format!("Invalid value '{value}' for {key}: {e}"))
    })
}

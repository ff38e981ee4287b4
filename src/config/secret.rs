//! Secure credential handling using the secrecy crate
//!
//! The API bearer token is held in a [`SecretString`]: its memory is zeroed
//! on drop and its `Debug` output is redacted, so the token never ends up in
//! a log line by accident. Call `expose_secret()` at the point of use.
//!
//! # Example
//!
//! ```rust
//! use rider_export::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let token = secret_string("sk-test".to_string());
//! assert_eq!(token.expose_secret(), "sk-test");
//! assert!(!format!("{token:?}").contains("sk-test"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Check if the secret value is empty or whitespace
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Type alias for a secret string
pub type SecretString = Secret<SecretValue>;

/// Wrap a String in a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_string_creation() {
        let secret = secret_string("test-token".to_string());
        assert_eq!(secret.expose_secret(), "test-token");
    }

    #[test]
    fn test_secret_debug_redacted() {
        let secret = secret_string("sensitive-token".to_string());
        let debug_output = format!("{secret:?}");

        assert!(!debug_output.contains("sensitive-token"));
        assert!(debug_output.contains("REDACTED") || debug_output.contains("Secret"));
    }

    #[test]
    fn test_blank_secret() {
        assert!(secret_string("   ".to_string()).expose_secret().is_blank());
        assert!(!secret_string("abc".to_string()).expose_secret().is_blank());
    }
}

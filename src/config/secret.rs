//! Secret string wrapper for credentials.
//!
//! Keeps the database password (and the connection URL embedding it) out of
//! `Debug` and `Display` output.

use std::fmt;

/// A wrapper for sensitive strings that redacts the value in Debug/Display output.
///
/// # Example
///
/// ```
/// use people_api::config::SecretString;
///
/// let secret = SecretString::new("hunter2");
/// assert_eq!(format!("{:?}", secret), "<REDACTED>");
/// assert_eq!(secret.expose(), "hunter2");
/// ```
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    /// Creates a new `SecretString` from any string-like value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Exposes the underlying secret value.
    ///
    /// Only call this where the secret is handed to the database driver.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns true if the secret is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for SecretString {}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_string_from_string() {
        let secret: SecretString = String::from("pw-123").into();
        assert_eq!(secret.expose(), "pw-123");
    }

    #[test]
    fn test_secret_string_debug_and_display_redacted() {
        let secret = SecretString::new("mysql://root:pw@db:3306/api_db");
        assert_eq!(format!("{secret:?}"), "<REDACTED>");
        assert_eq!(format!("{secret}"), "<REDACTED>");
    }

    #[test]
    fn test_secret_string_eq() {
        assert_eq!(SecretString::new("same"), SecretString::new("same"));
        assert_ne!(SecretString::new("same"), SecretString::new("other"));
    }

    #[test]
    fn test_secret_string_is_empty() {
        assert!(SecretString::new("").is_empty());
        assert!(!SecretString::new("pw").is_empty());
    }
}

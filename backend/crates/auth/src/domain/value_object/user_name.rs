//! User Name Value Object
//!
//! The unique login handle of a user.
//!
//! ## Invariants
//! - NFKC normalized, surrounding whitespace trimmed
//! - 1 to 64 characters
//! - No control characters
//!
//! Matching is exact (case-sensitive) on the normalized form.

use std::fmt;
use unicode_normalization::UnicodeNormalization;

use crate::error::{AuthError, AuthResult};

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Validate and normalize user input
    pub fn new(raw: impl AsRef<str>) -> AuthResult<Self> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(AuthError::InvalidInput("Username is required.".to_string()));
        }

        let len = trimmed.chars().count();
        if len > USER_NAME_MAX_LENGTH {
            return Err(AuthError::InvalidInput(format!(
                "Username must be at most {} characters (got {})",
                USER_NAME_MAX_LENGTH, len
            )));
        }

        if trimmed.chars().any(char::is_control) {
            return Err(AuthError::InvalidInput(
                "Username contains invalid control characters".to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Restore from storage without re-validating
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let name = UserName::new("  alice  ").unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_nfkc_normalizes_fullwidth() {
        let name = UserName::new("ａｌｉｃｅ").unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_case_is_preserved() {
        assert_ne!(UserName::new("Alice").unwrap(), UserName::new("alice").unwrap());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(UserName::new("   "), Err(AuthError::InvalidInput(_))));
        assert!(matches!(UserName::new(""), Err(AuthError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_too_long() {
        let long = "a".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(matches!(UserName::new(long), Err(AuthError::InvalidInput(_))));
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_rejects_control_characters() {
        assert!(UserName::new("al\u{0000}ice").is_err());
    }
}

//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::crypto::DEFAULT_TOKEN_BYTES;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Lifetime of an issued session token (1 week)
    pub session_ttl: Duration,
    /// Random bytes behind each token
    pub token_bytes: usize,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            token_bytes: DEFAULT_TOKEN_BYTES,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Override the session lifetime
    pub fn with_session_ttl(self, session_ttl: Duration) -> Self {
        Self {
            session_ttl,
            ..self
        }
    }

    /// Set the password pepper
    pub fn with_pepper(self, pepper: Vec<u8>) -> Self {
        Self {
            password_pepper: Some(pepper),
            ..self
        }
    }

    /// Get session TTL in milliseconds
    pub fn session_ttl_ms(&self) -> i64 {
        i64::try_from(self.session_ttl.as_millis()).unwrap_or(i64::MAX)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

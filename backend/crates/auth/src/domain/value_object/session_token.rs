//! Session Token Value Object
//!
//! The `(token, expires)` pair held on a user. An empty token means no
//! active session; `expires` is an epoch-millisecond timestamp and the
//! session is valid only while `now < expires`.

use chrono::Utc;
use platform::crypto::{constant_time_eq, generate_token};
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    token: String,
    expires_ms: i64,
}

impl SessionToken {
    /// Issue a fresh random token valid for `ttl_ms` from now
    pub fn issue(ttl_ms: i64, token_bytes: usize) -> Self {
        Self {
            token: generate_token(token_bytes),
            expires_ms: Utc::now().timestamp_millis().saturating_add(ttl_ms),
        }
    }

    /// The cleared state: empty token, zero expiry
    pub fn empty() -> Self {
        Self {
            token: String::new(),
            expires_ms: 0,
        }
    }

    pub fn from_parts(token: String, expires_ms: i64) -> Self {
        Self { token, expires_ms }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expires_ms(&self) -> i64 {
        self.expires_ms
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    pub fn is_active_at(&self, now_ms: i64) -> bool {
        !self.is_empty() && now_ms < self.expires_ms
    }

    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now().timestamp_millis())
    }

    /// Whether `candidate` is this token. The empty token never matches.
    pub fn matches(&self, candidate: &str) -> bool {
        !self.is_empty() && constant_time_eq(self.token.as_bytes(), candidate.as_bytes())
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("token", &if self.is_empty() { "" } else { "[TOKEN]" })
            .field("expires_ms", &self.expires_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_expires_in_future() {
        let now = Utc::now().timestamp_millis();
        let session = SessionToken::issue(60_000, 32);
        assert!(!session.is_empty());
        assert!(session.expires_ms() >= now + 60_000);
        assert!(session.is_active());
    }

    #[test]
    fn test_issue_generates_distinct_tokens() {
        assert_ne!(SessionToken::issue(1_000, 32), SessionToken::issue(1_000, 32));
    }

    #[test]
    fn test_empty_is_never_active_or_matching() {
        let session = SessionToken::empty();
        assert!(session.is_empty());
        assert_eq!(session.expires_ms(), 0);
        assert!(!session.is_active_at(-1));
        assert!(!session.matches(""));
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let session = SessionToken::from_parts("abc".to_string(), 1_000);
        assert!(session.is_active_at(999));
        assert!(!session.is_active_at(1_000));
    }

    #[test]
    fn test_matches() {
        let session = SessionToken::from_parts("abc".to_string(), 1_000);
        assert!(session.matches("abc"));
        assert!(!session.matches("abd"));
        assert!(!session.matches("ab"));
    }

    #[test]
    fn test_debug_hides_token() {
        let session = SessionToken::from_parts("secret-token".to_string(), 1);
        assert!(!format!("{:?}", session).contains("secret-token"));
    }
}

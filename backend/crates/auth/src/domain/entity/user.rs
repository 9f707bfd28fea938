//! User Entity
//!
//! A registered account together with its single session slot.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    session_token::SessionToken, user_id::UserId, user_name::UserName,
    user_password::UserPassword,
};

/// User entity
///
/// Holds at most one active session: issuing a token replaces the previous
/// one and logout resets it to the empty state.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Unique login handle
    pub username: UserName,
    /// Argon2id password hash, never serialized into responses
    pub password: UserPassword,
    /// Current session token and expiry
    pub session: SessionToken,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user without a session
    pub fn new(username: UserName, password: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            username,
            password,
            session: SessionToken::empty(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Current token (empty when signed out)
    pub fn token(&self) -> &str {
        self.session.token()
    }

    /// Session expiry in epoch milliseconds (0 when signed out)
    pub fn expires_ms(&self) -> i64 {
        self.session.expires_ms()
    }

    /// Replace the session slot
    pub fn set_session(&mut self, session: SessionToken) {
        self.session = session;
        self.updated_at = Utc::now();
    }

    /// Clear the session slot
    pub fn clear_session(&mut self) {
        self.set_session(SessionToken::empty());
    }

    pub fn has_active_session(&self) -> bool {
        self.session.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn user() -> User {
        let raw = RawPassword::new("s3cret-pass".to_string()).unwrap();
        User::new(
            UserName::new("alice").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[test]
    fn test_new_user_has_no_session() {
        let user = user();
        assert_eq!(user.token(), "");
        assert_eq!(user.expires_ms(), 0);
        assert!(!user.has_active_session());
    }

    #[test]
    fn test_set_session_overwrites_previous_token() {
        let mut user = user();
        user.set_session(SessionToken::issue(60_000, 16));
        let first = user.token().to_string();

        user.set_session(SessionToken::issue(60_000, 16));
        assert_ne!(user.token(), first);
        assert!(user.has_active_session());
    }

    #[test]
    fn test_clear_session() {
        let mut user = user();
        user.set_session(SessionToken::issue(60_000, 16));
        user.clear_session();
        assert_eq!(user.token(), "");
        assert_eq!(user.expires_ms(), 0);
    }
}

//! Refresh Session
//!
//! Issues a new token and expiry for an already identified user.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserStore;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

/// Whitelisted view of a user: `username`, `token`, `expires`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutput {
    pub username: String,
    pub token: String,
    pub expires: i64,
}

impl From<&User> for SessionOutput {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.to_string(),
            token: user.token().to_string(),
            expires: user.expires_ms(),
        }
    }
}

/// Refresh session use case
pub struct RefreshSessionUseCase<S>
where
    S: UserStore,
{
    store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> RefreshSessionUseCase<S>
where
    S: UserStore + Send + Sync,
{
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { store, config }
    }

    /// Overwrite the user's session slot and return the projection
    pub async fn execute(&self, user: &User) -> AuthResult<SessionOutput> {
        let session = SessionToken::issue(self.config.session_ttl_ms(), self.config.token_bytes);

        let updated = self
            .store
            .update_session(&user.user_id, &session)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::debug!(
            username = %updated.username,
            expires = updated.expires_ms(),
            "Session token refreshed"
        );

        Ok(SessionOutput::from(&updated))
    }
}

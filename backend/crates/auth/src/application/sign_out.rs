//! Sign Out Use Case
//!
//! Clears the session slot of the user holding the presented token.

use std::sync::Arc;

use crate::domain::repository::UserStore;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: UserStore,
{
    store: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: UserStore + Send + Sync,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Expired tokens still match, so a stale session can always be closed.
    pub async fn execute(&self, token: Option<&str>) -> AuthResult<()> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::TokenMissing)?;

        let user = self
            .store
            .find_by_token(token)
            .await?
            .ok_or(AuthError::TokenNotFound)?;

        self.store
            .update_session(&user.user_id, &SessionToken::empty())
            .await?
            .ok_or(AuthError::TokenNotFound)?;

        tracing::info!(username = %user.username, "User logged out");
        Ok(())
    }
}

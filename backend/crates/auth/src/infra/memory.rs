//! In-memory User Store
//!
//! Process-local store for development and tests. Data is lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use crate::domain::entity::user::User;
use crate::domain::repository::UserStore;
use crate::domain::value_object::{
    session_token::SessionToken, user_id::UserId, user_name::UserName,
};
use crate::error::{AuthError, AuthResult};

/// Users keyed by username
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

impl UserStore for InMemoryUserStore {
    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users.contains_key(user.username.as_str()) {
            warn!("Username already exists in memory");
            return Err(AuthError::UserNameTaken);
        }
        users.insert(user.username.as_str().to_string(), user.clone());

        debug!("User created in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(username.as_str()).cloned())
    }

    #[instrument(skip_all)]
    async fn find_by_token(&self, token: &str) -> AuthResult<Option<User>> {
        if token.is_empty() {
            return Ok(None);
        }

        let users = self.users.read().await;
        let user = users.values().find(|u| u.session.matches(token)).cloned();

        debug!(found = user.is_some(), "Token lookup in memory");
        Ok(user)
    }

    #[instrument(skip(self, session))]
    async fn update_session(
        &self,
        user_id: &UserId,
        session: &SessionToken,
    ) -> AuthResult<Option<User>> {
        let mut users = self.users.write().await;

        let Some(user) = users.values_mut().find(|u| &u.user_id == user_id) else {
            warn!("User not found for session update in memory");
            return Ok(None);
        };
        user.set_session(session.clone());

        Ok(Some(user.clone()))
    }

    #[instrument(skip(self))]
    async fn cleanup_expired(&self, now_ms: i64) -> AuthResult<u64> {
        let mut users = self.users.write().await;
        let mut cleared = 0;

        for user in users.values_mut() {
            if !user.session.is_empty() && user.expires_ms() <= now_ms {
                user.clear_session();
                cleared += 1;
            }
        }

        debug!(cleared, "Expired sessions cleared in memory");
        Ok(cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::{RawPassword, UserPassword};

    fn user(name: &str) -> User {
        let raw = RawPassword::new("correct horse".to_string()).unwrap();
        User::new(
            UserName::new(name).unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_username() {
        let store = InMemoryUserStore::new();
        store.create(&user("alice")).await.unwrap();

        let err = store.create(&user("alice")).await.unwrap_err();
        assert!(matches!(err, AuthError::UserNameTaken));
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_find_by_token_ignores_empty_token() {
        let store = InMemoryUserStore::new();
        store.create(&user("alice")).await.unwrap();

        assert!(store.find_by_token("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_session_then_find_by_token() {
        let store = InMemoryUserStore::new();
        let alice = user("alice");
        store.create(&alice).await.unwrap();

        let session = SessionToken::issue(60_000, 32);
        let updated = store
            .update_session(&alice.user_id, &session)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.token(), session.token());

        let found = store.find_by_token(session.token()).await.unwrap().unwrap();
        assert_eq!(found.user_id, alice.user_id);
    }

    #[tokio::test]
    async fn test_update_session_unknown_user() {
        let store = InMemoryUserStore::new();
        let ghost = user("ghost");

        let result = store
            .update_session(&ghost.user_id, &SessionToken::issue(1_000, 16))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_cleanup_expired_clears_only_expired_sessions() {
        let store = InMemoryUserStore::new();
        let alice = user("alice");
        let bob = user("bob");
        store.create(&alice).await.unwrap();
        store.create(&bob).await.unwrap();

        store
            .update_session(&alice.user_id, &SessionToken::from_parts("old".into(), 500))
            .await
            .unwrap();
        store
            .update_session(&bob.user_id, &SessionToken::from_parts("fresh".into(), 5_000))
            .await
            .unwrap();

        assert_eq!(store.cleanup_expired(1_000).await.unwrap(), 1);
        assert!(store.find_by_token("old").await.unwrap().is_none());
        assert!(store.find_by_token("fresh").await.unwrap().is_some());
    }
}

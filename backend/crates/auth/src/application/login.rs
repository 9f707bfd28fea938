//! Login Use Case
//!
//! Verifies username + password and issues a fresh session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::refresh::{RefreshSessionUseCase, SessionOutput};
use crate::application::strategy::{Credentials, Strategies, StrategyKind};
use crate::domain::repository::UserStore;
use crate::error::AuthResult;

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<S>
where
    S: UserStore,
{
    strategies: Arc<Strategies<S>>,
    refresh: RefreshSessionUseCase<S>,
}

impl<S> LoginUseCase<S>
where
    S: UserStore + Send + Sync,
{
    pub fn new(strategies: Arc<Strategies<S>>, store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            strategies,
            refresh: RefreshSessionUseCase::new(store, config),
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<SessionOutput> {
        let credentials = Credentials::Password {
            username: input.username,
            password: input.password,
        };

        let user = self
            .strategies
            .authenticate(StrategyKind::Local, credentials)
            .await?;

        let output = self.refresh.execute(&user).await?;

        tracing::info!(username = %output.username, "User logged in");

        Ok(output)
    }
}

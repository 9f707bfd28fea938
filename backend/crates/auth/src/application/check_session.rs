//! Check Session Use Case
//!
//! Validates a bearer token and rotates it. Every successful check issues a
//! new token, so the previous one stops working.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::refresh::{RefreshSessionUseCase, SessionOutput};
use crate::application::strategy::{Credentials, Strategies, StrategyKind};
use crate::domain::repository::UserStore;
use crate::error::AuthResult;

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: UserStore,
{
    strategies: Arc<Strategies<S>>,
    refresh: RefreshSessionUseCase<S>,
}

impl<S> CheckSessionUseCase<S>
where
    S: UserStore + Send + Sync,
{
    pub fn new(strategies: Arc<Strategies<S>>, store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            strategies,
            refresh: RefreshSessionUseCase::new(store, config),
        }
    }

    pub async fn execute(&self, token: Option<String>) -> AuthResult<SessionOutput> {
        let user = self
            .strategies
            .authenticate(StrategyKind::Bearer, Credentials::Bearer { token })
            .await?;

        self.refresh.execute(&user).await
    }
}

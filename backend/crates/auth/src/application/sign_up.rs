//! Sign Up Use Case
//!
//! Creates a new user account. No session is issued.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::refresh::SessionOutput;
use crate::domain::entity::user::User;
use crate::domain::repository::UserStore;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::AuthResult;

/// Sign up input
pub struct SignUpInput {
    pub username: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<S>
where
    S: UserStore,
{
    store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignUpUseCase<S>
where
    S: UserStore + Send + Sync,
{
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SessionOutput> {
        let username = UserName::new(&input.username)?;
        let raw_password = RawPassword::new(input.password)?;
        let password = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let user = User::new(username, password);

        // Uniqueness is enforced by the store
        self.store.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User signed up"
        );

        Ok(SessionOutput::from(&user))
    }
}

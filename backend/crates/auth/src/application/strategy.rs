//! Authentication Strategies
//!
//! Pluggable credential verification. Each strategy turns a set of
//! credentials into a `User` or an `AuthError::Unauthenticated` carrying
//! the failure info. `Strategies` holds one instance of each, built once at
//! startup, and dispatches on `StrategyKind`.

use std::fmt;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserStore;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

pub const MISSING_CREDENTIALS: &str = "Missing credentials";
pub const INCORRECT_CREDENTIALS: &str = "Incorrect username or password.";
pub const MISSING_BEARER_TOKEN: &str = "Missing bearer token.";
pub const INVALID_TOKEN: &str = "Invalid token.";
pub const TOKEN_EXPIRED: &str = "Token expired.";

/// Strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Username + password
    Local,
    /// Opaque session token
    Bearer,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Local => "local",
            StrategyKind::Bearer => "bearer",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials presented by a request
pub enum Credentials {
    Password { username: String, password: String },
    Bearer { token: Option<String> },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Credentials::Bearer { token } => f
                .debug_struct("Bearer")
                .field("token", &token.as_ref().map(|_| "[TOKEN]"))
                .finish(),
        }
    }
}

fn unauthenticated(info: &str) -> AuthError {
    AuthError::Unauthenticated(info.to_string())
}

/// Credential verification capability
#[trait_variant::make(AuthStrategy: Send)]
pub trait LocalAuthStrategy {
    /// Which mechanism this strategy implements
    fn kind(&self) -> StrategyKind;

    /// Verify credentials and yield the authenticated user
    async fn verify(&self, credentials: Credentials) -> AuthResult<User>;
}

// ============================================================================
// Local (username + password)
// ============================================================================

/// Username/password strategy
pub struct PasswordStrategy<S> {
    store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> PasswordStrategy<S> {
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { store, config }
    }
}

impl<S> AuthStrategy for PasswordStrategy<S>
where
    S: UserStore + Send + Sync,
{
    fn kind(&self) -> StrategyKind {
        StrategyKind::Local
    }

    async fn verify(&self, credentials: Credentials) -> AuthResult<User> {
        let Credentials::Password { username, password } = credentials else {
            return Err(unauthenticated(MISSING_CREDENTIALS));
        };

        if username.trim().is_empty() || password.is_empty() {
            return Err(unauthenticated(MISSING_CREDENTIALS));
        }

        let username =
            UserName::new(&username).map_err(|_| unauthenticated(INCORRECT_CREDENTIALS))?;
        let raw_password =
            RawPassword::new(password).map_err(|_| unauthenticated(INCORRECT_CREDENTIALS))?;

        let user = self
            .store
            .find_by_username(&username)
            .await?
            .ok_or_else(|| unauthenticated(INCORRECT_CREDENTIALS))?;

        if !user.password.verify(&raw_password, self.config.pepper()) {
            return Err(unauthenticated(INCORRECT_CREDENTIALS));
        }

        Ok(user)
    }
}

// ============================================================================
// Bearer (session token)
// ============================================================================

/// Session token strategy; stateless, nothing is persisted on success
pub struct BearerStrategy<S> {
    store: Arc<S>,
}

impl<S> BearerStrategy<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> AuthStrategy for BearerStrategy<S>
where
    S: UserStore + Send + Sync,
{
    fn kind(&self) -> StrategyKind {
        StrategyKind::Bearer
    }

    async fn verify(&self, credentials: Credentials) -> AuthResult<User> {
        let token = match credentials {
            Credentials::Bearer { token: Some(token) } if !token.is_empty() => token,
            _ => return Err(unauthenticated(MISSING_BEARER_TOKEN)),
        };

        let user = self
            .store
            .find_by_token(&token)
            .await?
            .ok_or_else(|| unauthenticated(INVALID_TOKEN))?;

        if !user.has_active_session() {
            return Err(unauthenticated(TOKEN_EXPIRED));
        }

        Ok(user)
    }
}

// ============================================================================
// Registry
// ============================================================================

/// The strategies available to the route handlers
pub struct Strategies<S> {
    local: PasswordStrategy<S>,
    bearer: BearerStrategy<S>,
}

impl<S> Strategies<S>
where
    S: UserStore + Send + Sync,
{
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            local: PasswordStrategy::new(store.clone(), config),
            bearer: BearerStrategy::new(store),
        }
    }

    /// Run the strategy selected by `kind`
    pub async fn authenticate(
        &self,
        kind: StrategyKind,
        credentials: Credentials,
    ) -> AuthResult<User> {
        let result = match kind {
            StrategyKind::Local => AuthStrategy::verify(&self.local, credentials).await,
            StrategyKind::Bearer => AuthStrategy::verify(&self.bearer, credentials).await,
        };

        if let Err(AuthError::Unauthenticated(info)) = &result {
            tracing::debug!(strategy = %kind, info = %info, "Strategy rejected credentials");
        }

        result
    }
}

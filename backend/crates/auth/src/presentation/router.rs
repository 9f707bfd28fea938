//! Auth Router

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserStore;
use crate::infra::postgres::PgUserStore;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::parse_request_token;

/// Create the Auth router with the PostgreSQL store
pub fn auth_router(store: PgUserStore, config: AuthConfig) -> Router {
    auth_router_generic(store, config)
}

/// Create a generic Auth router for any store implementation
pub fn auth_router_generic<S>(store: S, config: AuthConfig) -> Router
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let state = AuthAppState::new(store, config);

    Router::new()
        .route("/login", post(handlers::login::<S>))
        .route("/check", get(handlers::check::<S>))
        .route("/signup", post(handlers::sign_up::<S>))
        .route("/logout", delete(handlers::logout::<S>))
        .layer(middleware::from_fn(parse_request_token))
        .with_state(state)
}

//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::sync::Arc;

use kernel::error::app_error::AppError;

use crate::application::config::AuthConfig;
use crate::application::strategy::Strategies;
use crate::application::{
    CheckSessionUseCase, LoginInput, LoginUseCase, SignOutUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::UserStore;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, SessionResponse, SignUpRequest};
use crate::presentation::middleware::RequestToken;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<S>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<AuthConfig>,
    pub strategies: Arc<Strategies<S>>,
}

impl<S> AuthAppState<S>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    pub fn new(store: S, config: AuthConfig) -> Self {
        let store = Arc::new(store);
        let config = Arc::new(config);
        let strategies = Arc::new(Strategies::new(store.clone(), config.clone()));

        Self {
            store,
            config,
            strategies,
        }
    }
}

/// Build an error envelope `{code, message}`. A missing status means 500.
pub fn respond(status: Option<StatusCode>, message: impl Into<String>) -> Response {
    AppError::from_status(status.map(|s| s.as_u16()), message.into()).into_response()
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<S>(
    State(state): State<AuthAppState<S>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    // An unreadable body is treated as absent credentials
    let req = payload.map(|Json(req)| req).unwrap_or_default();

    let use_case = LoginUseCase::new(
        state.strategies.clone(),
        state.store.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(SessionResponse::from(output))))
}

// ============================================================================
// Check
// ============================================================================

/// GET /api/auth/check
pub async fn check<S>(
    State(state): State<AuthAppState<S>>,
    RequestToken(token): RequestToken,
) -> AuthResult<impl IntoResponse>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = CheckSessionUseCase::new(
        state.strategies.clone(),
        state.store.clone(),
        state.config.clone(),
    );

    let output = use_case.execute(token).await?;

    Ok((StatusCode::CREATED, Json(SessionResponse::from(output))))
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<S>(
    State(state): State<AuthAppState<S>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> AuthResult<Json<SessionResponse>>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(|e| AuthError::InvalidInput(e.body_text()))?;

    let use_case = SignUpUseCase::new(state.store.clone(), state.config.clone());

    let output = use_case
        .execute(SignUpInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(SessionResponse::from(output)))
}

// ============================================================================
// Logout
// ============================================================================

/// DELETE /api/auth/logout
pub async fn logout<S>(
    State(state): State<AuthAppState<S>>,
    token: RequestToken,
) -> AuthResult<Json<serde_json::Value>>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let use_case = SignOutUseCase::new(state.store.clone());

    use_case.execute(token.as_deref()).await?;

    Ok(Json(json!({})))
}

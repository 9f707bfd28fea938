//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A strategy rejected the credentials; carries the failure info
    #[error("{0}")]
    Unauthenticated(String),

    /// No token supplied with the request
    #[error("Token not found.")]
    TokenMissing,

    /// Token supplied but no user holds it
    #[error("Token not found.")]
    TokenNotFound,

    /// User vanished between authentication and update
    #[error("User not found.")]
    UserNotFound,

    /// Username already exists
    #[error("Username already exists.")]
    UserNameTaken,

    /// Request payload failed validation
    #[error("{0}")]
    InvalidInput(String),

    /// Store failure, surfaced with the raw driver message
    #[error("{0}")]
    Store(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Unauthenticated(_)
            | AuthError::TokenMissing
            | AuthError::InvalidInput(_)
            | AuthError::Store(_) => ErrorKind::BadRequest,
            AuthError::TokenNotFound | AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Store(msg) => {
                tracing::warn!(error = %msg, "User store error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::Unauthenticated(info) => {
                tracing::warn!(info = %info, "Authentication failed");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        crate::presentation::handlers::respond(Some(self.status_code()), self.to_string())
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return AuthError::UserNameTaken;
            }
        }
        AuthError::Store(err.to_string())
    }
}

impl From<platform::password::PasswordPolicyError> for AuthError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        AuthError::InvalidInput(err.to_string())
    }
}

//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, store trait
//! - `application/` - Use cases and authentication strategies
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router, token middleware
//!
//! ## Routes
//! - `POST /login` - username + password, issues a session token (201)
//! - `GET /check` - validates and rotates a bearer token (201)
//! - `POST /signup` - creates an account without a session (200)
//! - `DELETE /logout` - clears the session slot (200)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - One session slot per user; a new token replaces the old one
//! - Tokens are compared in constant time
//! - Responses only ever carry `username`, `token` and `expires`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryUserStore, PgUserStore};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

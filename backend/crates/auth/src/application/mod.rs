//! Application Layer
//!
//! Use cases and authentication strategies.

pub mod check_session;
pub mod config;
pub mod login;
pub mod refresh;
pub mod sign_out;
pub mod sign_up;
pub mod strategy;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use refresh::{RefreshSessionUseCase, SessionOutput};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use strategy::{AuthStrategy, Credentials, Strategies, StrategyKind};

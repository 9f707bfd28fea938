//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::refresh::SessionOutput;

/// Login request
///
/// Missing fields deserialize as empty strings so the strategy can answer
/// with its own "missing credentials" message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Sign up request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Session response shared by login, check and signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub username: String,
    pub token: String,
    /// Epoch milliseconds
    pub expires: i64,
}

impl From<SessionOutput> for SessionResponse {
    fn from(output: SessionOutput) -> Self {
        Self {
            username: output.username,
            token: output.token,
            expires: output.expires,
        }
    }
}

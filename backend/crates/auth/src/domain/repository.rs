//! Repository Traits
//!
//! Interface for user persistence. Implementations are in the infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{
    session_token::SessionToken, user_id::UserId, user_name::UserName,
};
use crate::error::AuthResult;

/// User store trait
#[trait_variant::make(UserStore: Send)]
pub trait LocalUserStore {
    /// Create a new user. Fails with `UserNameTaken` on a duplicate username.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by username
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>>;

    /// Find the user currently holding `token`. The empty token matches nobody.
    async fn find_by_token(&self, token: &str) -> AuthResult<Option<User>>;

    /// Overwrite the session slot and return the updated user
    async fn update_session(
        &self,
        user_id: &UserId,
        session: &SessionToken,
    ) -> AuthResult<Option<User>>;

    /// Clear sessions whose expiry is at or before `now_ms`
    async fn cleanup_expired(&self, now_ms: i64) -> AuthResult<u64>;
}

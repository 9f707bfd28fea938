//! PostgreSQL User Store

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserStore;
use crate::domain::value_object::{
    session_token::SessionToken, user_id::UserId, user_name::UserName,
    user_password::UserPassword,
};
use crate::error::AuthResult;

const USER_COLUMNS: &str =
    "user_id, username, password_hash, token, expires_ms, created_at, updated_at";

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    username: String,
    password_hash: String,
    token: String,
    expires_ms: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            username: UserName::from_db(self.username),
            password: UserPassword::from_db(self.password_hash)?,
            session: SessionToken::from_parts(self.token, self.expires_ms),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl UserStore for PgUserStore {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                username,
                password_hash,
                token,
                expires_ms,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.username.as_str())
        .bind(user.password.as_str())
        .bind(user.token())
        .bind(user.expires_ms())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1"))
                .bind(username.as_str())
                .fetch_optional(&self.pool)
                .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_token(&self, token: &str) -> AuthResult<Option<User>> {
        if token.is_empty() {
            return Ok(None);
        }

        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE token = $1"))
                .bind(token)
                .fetch_optional(&self.pool)
                .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn update_session(
        &self,
        user_id: &UserId,
        session: &SessionToken,
    ) -> AuthResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            r#"
            UPDATE users
            SET token = $2, expires_ms = $3, updated_at = NOW()
            WHERE user_id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user_id.as_uuid())
        .bind(session.token())
        .bind(session.expires_ms())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn cleanup_expired(&self, now_ms: i64) -> AuthResult<u64> {
        let cleared = sqlx::query(
            r#"
            UPDATE users
            SET token = '', expires_ms = 0, updated_at = NOW()
            WHERE token <> '' AND expires_ms <= $1
            "#,
        )
        .bind(now_ms)
        .execute(&self.pool)
        .await?
        .rows_affected();

        tracing::info!(sessions_cleared = cleared, "Cleaned up expired sessions");

        Ok(cleared)
    }
}

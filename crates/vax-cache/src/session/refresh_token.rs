//! Refresh token storage in Redis.
//!
//! Stores refresh tokens with automatic expiration so logout and refresh
//! rotation can revoke them before the JWT itself expires.

use async_trait::async_trait;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use vax_core::traits::{RepoResult, SessionStore};
use vax_core::UserId;

use crate::pool::{RedisPool, RedisPoolError, RedisResult};

/// Key prefix for refresh tokens
const REFRESH_TOKEN_PREFIX: &str = "refresh_token:";

/// Key prefix for the per-user set of live tokens
const USER_TOKENS_PREFIX: &str = "user_tokens:";

/// Default TTL for refresh tokens (7 days)
const DEFAULT_REFRESH_TOKEN_TTL: u64 = 7 * 24 * 60 * 60;

/// Stored refresh token data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenData {
    /// User ID this token belongs to
    pub user_id: UserId,
    /// Token creation timestamp (Unix epoch seconds)
    pub created_at: i64,
}

impl RefreshTokenData {
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Refresh token store for managing authentication sessions
#[derive(Clone)]
pub struct RefreshTokenStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl RefreshTokenStore {
    /// Create a new refresh token store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_REFRESH_TOKEN_TTL,
        }
    }

    /// Create with custom TTL, normally the refresh JWT lifetime
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    fn key(token: &str) -> String {
        format!("{REFRESH_TOKEN_PREFIX}{token}")
    }

    fn user_set_key(user_id: UserId) -> String {
        format!("{USER_TOKENS_PREFIX}{user_id}")
    }

    async fn store_token(&self, token: &str, data: &RefreshTokenData) -> RedisResult<()> {
        self.pool
            .set(&Self::key(token), data, Some(self.ttl_seconds))
            .await?;

        let ttl = i64::try_from(self.ttl_seconds)
            .map_err(|_| RedisPoolError::InvalidTtl(self.ttl_seconds))?;
        let user_set_key = Self::user_set_key(data.user_id);
        let mut conn = self.pool.get().await?;
        conn.sadd::<_, _, ()>(&user_set_key, token).await?;
        conn.expire::<_, ()>(&user_set_key, ttl).await?;

        tracing::debug!(user_id = %data.user_id, "Stored refresh token");
        Ok(())
    }

    async fn revoke_token(&self, token: &str) -> RedisResult<bool> {
        if let Some(data) = self.pool.get_value::<RefreshTokenData>(&Self::key(token)).await? {
            let mut conn = self.pool.get().await?;
            conn.srem::<_, _, ()>(Self::user_set_key(data.user_id), token)
                .await?;
        }

        let deleted = self.pool.delete(&Self::key(token)).await?;
        if deleted {
            tracing::debug!("Revoked refresh token");
        }
        Ok(deleted)
    }

    async fn revoke_user(&self, user_id: UserId) -> RedisResult<u32> {
        let user_set_key = Self::user_set_key(user_id);
        let mut conn = self.pool.get().await?;

        let tokens: Vec<String> = conn.smembers(&user_set_key).await?;
        let count = tokens.len() as u32;

        if !tokens.is_empty() {
            let keys: Vec<String> = tokens.iter().map(|t| Self::key(t)).collect();
            let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
            self.pool.delete_many(&key_refs).await?;
        }
        conn.del::<_, ()>(&user_set_key).await?;

        tracing::info!(user_id = %user_id, count, "Revoked all refresh tokens for user");
        Ok(count)
    }
}

#[async_trait]
impl SessionStore for RefreshTokenStore {
    async fn store(&self, refresh_token: &str, user_id: UserId) -> RepoResult<()> {
        Ok(self
            .store_token(refresh_token, &RefreshTokenData::new(user_id))
            .await?)
    }

    async fn validate(&self, refresh_token: &str) -> RepoResult<Option<UserId>> {
        let data = self
            .pool
            .get_value::<RefreshTokenData>(&Self::key(refresh_token))
            .await?;
        Ok(data.map(|d| d.user_id))
    }

    async fn revoke(&self, refresh_token: &str) -> RepoResult<bool> {
        Ok(self.revoke_token(refresh_token).await?)
    }

    async fn revoke_all_for_user(&self, user_id: UserId) -> RepoResult<u32> {
        Ok(self.revoke_user(user_id).await?)
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};

/// Redis-backed token blacklist.
///
/// Key layout:
/// ```text
/// auth:blacklist:token:{token_hash} -> "{user_id}"
/// ```
/// Presence of the key means the token is revoked. The TTL matches the
/// token's own expiry, so Redis handles cleanup and a lookup stays O(1).
#[derive(Clone)]
pub struct RedisTokenBlacklist {
    pool: Arc<Pool>,
}

impl RedisTokenBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:blacklist:token:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenRepositoryError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenRepositoryError::StorageError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TokenRepository for RedisTokenBlacklist {
    async fn blacklist_token(
        &self,
        token_hash: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            // Already expired; nothing to store
            return Ok(());
        }

        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(Self::token_key(token_hash), user_id.to_string(), ttl as u64)
            .await
            .map_err(|e| TokenRepositoryError::StorageError(e.to_string()))?;

        Ok(())
    }

    async fn is_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        let mut conn = self.get_conn().await?;

        conn.exists(Self::token_key(token_hash))
            .await
            .map_err(|e| TokenRepositoryError::StorageError(e.to_string()))
    }
}

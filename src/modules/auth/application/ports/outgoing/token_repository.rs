use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Blacklist for revoked tokens. Entries expire on their own; a hit means
/// the token must be rejected even though its signature still verifies.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn blacklist_token(
        &self,
        token_hash: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError>;

    async fn is_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError>;
}

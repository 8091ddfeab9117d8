use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BackgroundStoreError {
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Persists the stored background path on the owning user.
#[async_trait]
pub trait BackgroundStore: Send + Sync {
    async fn set_background(&self, user_id: Uuid, path: &str)
        -> Result<(), BackgroundStoreError>;
}

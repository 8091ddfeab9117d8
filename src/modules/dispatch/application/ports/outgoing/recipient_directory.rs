use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Recipient {
    pub user_id: Uuid,
    pub email: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecipientDirectoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Resolves dispatch targets to concrete recipients at send time. No
/// snapshot is taken; users registered after the dispatch simply miss it.
#[async_trait]
pub trait RecipientDirectory: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Recipient>, RecipientDirectoryError>;

    async fn find_by_id(&self, user_id: Uuid)
        -> Result<Option<Recipient>, RecipientDirectoryError>;
}

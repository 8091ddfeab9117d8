use async_trait::async_trait;
use uuid::Uuid;

use crate::content::application::domain::entities::LinkItem;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetLinksError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetLinksUseCase: Send + Sync {
    /// Lists the owner's links ordered by position.
    async fn execute(&self, owner: Uuid) -> Result<Vec<LinkItem>, GetLinksError>;
}

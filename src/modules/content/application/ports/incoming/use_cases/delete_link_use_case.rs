use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteLinkError {
    #[error("Link not found")]
    LinkNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteLinkUseCase: Send + Sync {
    /// Removes one link. Remaining positions keep their values.
    async fn execute(&self, owner: Uuid, link_id: Uuid) -> Result<(), DeleteLinkError>;
}

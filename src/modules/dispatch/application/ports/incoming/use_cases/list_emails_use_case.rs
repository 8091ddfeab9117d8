use async_trait::async_trait;

use crate::dispatch::application::domain::entities::SentEmail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListEmailsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListEmailsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SentEmail>, ListEmailsError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::dispatch::application::domain::entities::SentEmail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetEmailError {
    #[error("Email not found")]
    EmailNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetEmailUseCase: Send + Sync {
    async fn execute(&self, email_id: Uuid) -> Result<SentEmail, GetEmailError>;
}

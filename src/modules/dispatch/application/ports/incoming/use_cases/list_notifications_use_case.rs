use async_trait::async_trait;

use crate::dispatch::application::domain::entities::Notification;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListNotificationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListNotificationsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Notification>, ListNotificationsError>;
}

use async_trait::async_trait;

use crate::content::application::domain::entities::LinkItem;
use crate::content::application::ports::{
    incoming::use_cases::{CreateLinkCommand, CreateLinkError, CreateLinkUseCase},
    outgoing::{LinkRepository, LinkRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateLinkService<R>
where
    R: LinkRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateLinkService<R>
where
    R: LinkRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateLinkUseCase for CreateLinkService<R>
where
    R: LinkRepository + Send + Sync,
{
    async fn execute(&self, command: CreateLinkCommand) -> Result<LinkItem, CreateLinkError> {
        self.repository
            .create_link(
                command.owner(),
                command.label().to_string(),
                command.url().to_string(),
            )
            .await
            .map_err(|e| match e {
                LinkRepositoryError::DatabaseError(msg) => CreateLinkError::RepositoryError(msg),
                other => CreateLinkError::RepositoryError(other.to_string()),
            })
    }
}

use async_trait::async_trait;

use crate::content::application::domain::entities::LinkItem;
use crate::content::application::ports::{
    incoming::use_cases::{UpdateLinkCommand, UpdateLinkError, UpdateLinkUseCase},
    outgoing::{LinkRepository, LinkRepositoryError, PatchLinkData},
};

#[derive(Debug, Clone)]
pub struct UpdateLinkService<R>
where
    R: LinkRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateLinkService<R>
where
    R: LinkRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateLinkUseCase for UpdateLinkService<R>
where
    R: LinkRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateLinkCommand) -> Result<LinkItem, UpdateLinkError> {
        let data = PatchLinkData {
            label: command.label().cloned(),
            url: command.url().cloned(),
        };

        self.repository
            .update_link(command.owner(), command.link_id(), data)
            .await
            .map_err(|e| match e {
                LinkRepositoryError::LinkNotFound => UpdateLinkError::LinkNotFound,
                LinkRepositoryError::DatabaseError(msg) => UpdateLinkError::RepositoryError(msg),
            })
    }
}

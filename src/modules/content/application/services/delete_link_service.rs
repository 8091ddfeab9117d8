use async_trait::async_trait;
use uuid::Uuid;

use crate::content::application::ports::{
    incoming::use_cases::{DeleteLinkError, DeleteLinkUseCase},
    outgoing::{LinkRepository, LinkRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteLinkService<R>
where
    R: LinkRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteLinkService<R>
where
    R: LinkRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteLinkUseCase for DeleteLinkService<R>
where
    R: LinkRepository + Send + Sync,
{
    async fn execute(&self, owner: Uuid, link_id: Uuid) -> Result<(), DeleteLinkError> {
        self.repository
            .delete_link(owner, link_id)
            .await
            .map_err(|e| match e {
                LinkRepositoryError::LinkNotFound => DeleteLinkError::LinkNotFound,
                LinkRepositoryError::DatabaseError(msg) => DeleteLinkError::RepositoryError(msg),
            })
    }
}

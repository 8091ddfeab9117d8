use async_trait::async_trait;
use uuid::Uuid;

use crate::content::application::domain::entities::LinkItem;
use crate::content::application::ports::{
    incoming::use_cases::{GetLinksError, GetLinksUseCase},
    outgoing::LinkRepository,
};

#[derive(Debug, Clone)]
pub struct GetLinksService<R>
where
    R: LinkRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetLinksService<R>
where
    R: LinkRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetLinksUseCase for GetLinksService<R>
where
    R: LinkRepository + Send + Sync,
{
    async fn execute(&self, owner: Uuid) -> Result<Vec<LinkItem>, GetLinksError> {
        self.repository
            .list_links(owner)
            .await
            .map_err(|e| GetLinksError::RepositoryError(e.to_string()))
    }
}

use async_trait::async_trait;
use std::collections::HashSet;

use crate::content::application::ports::{
    incoming::use_cases::{ReorderLinksCommand, ReorderLinksError, ReorderLinksUseCase},
    outgoing::{LinkRepository, LinkRepositoryError},
};

#[derive(Debug, Clone)]
pub struct ReorderLinksService<R>
where
    R: LinkRepository + Send + Sync,
{
    repository: R,
}

impl<R> ReorderLinksService<R>
where
    R: LinkRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReorderLinksUseCase for ReorderLinksService<R>
where
    R: LinkRepository + Send + Sync,
{
    async fn execute(&self, command: ReorderLinksCommand) -> Result<(), ReorderLinksError> {
        let current = self
            .repository
            .list_links(command.owner())
            .await
            .map_err(map_repo_error)?;

        // The submitted list must be exactly the owner's collection.
        // Anything else is a stale or malicious request.
        let current_ids: HashSet<_> = current.iter().map(|l| l.id).collect();
        let submitted_ids: HashSet<_> = command.ordered_ids().iter().copied().collect();

        if current_ids != submitted_ids {
            return Err(ReorderLinksError::IdMismatch);
        }

        self.repository
            .set_order(command.owner(), command.ordered_ids())
            .await
            .map_err(map_repo_error)
    }
}

fn map_repo_error(err: LinkRepositoryError) -> ReorderLinksError {
    ReorderLinksError::RepositoryError(err.to_string())
}

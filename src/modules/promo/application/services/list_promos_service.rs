use async_trait::async_trait;

use crate::promo::application::domain::entities::PromoCode;
use crate::promo::application::ports::{
    incoming::use_cases::{ListPromosError, ListPromosUseCase},
    outgoing::PromoRepository,
};

#[derive(Debug, Clone)]
pub struct ListPromosService<R>
where
    R: PromoRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListPromosService<R>
where
    R: PromoRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListPromosUseCase for ListPromosService<R>
where
    R: PromoRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PromoCode>, ListPromosError> {
        self.repository
            .list_promos()
            .await
            .map_err(|e| ListPromosError::RepositoryError(e.to_string()))
    }
}

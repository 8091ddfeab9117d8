use async_trait::async_trait;
use uuid::Uuid;

use crate::promo::application::ports::{
    incoming::use_cases::{DeletePromoError, DeletePromoUseCase},
    outgoing::{PromoRepository, PromoRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeletePromoService<R>
where
    R: PromoRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeletePromoService<R>
where
    R: PromoRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeletePromoUseCase for DeletePromoService<R>
where
    R: PromoRepository + Send + Sync,
{
    async fn execute(&self, promo_id: Uuid) -> Result<(), DeletePromoError> {
        self.repository
            .delete_promo(promo_id)
            .await
            .map_err(|e| match e {
                PromoRepositoryError::PromoNotFound => DeletePromoError::PromoNotFound,
                other => DeletePromoError::RepositoryError(other.to_string()),
            })
    }
}

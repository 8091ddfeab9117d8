use async_trait::async_trait;

use crate::promo::application::domain::entities::PromoCode;
use crate::promo::application::ports::{
    incoming::use_cases::{CreatePromoCommand, CreatePromoError, CreatePromoUseCase},
    outgoing::{NewPromoCode, PromoRepository, PromoRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreatePromoService<R>
where
    R: PromoRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreatePromoService<R>
where
    R: PromoRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePromoUseCase for CreatePromoService<R>
where
    R: PromoRepository + Send + Sync,
{
    async fn execute(&self, command: CreatePromoCommand) -> Result<PromoCode, CreatePromoError> {
        self.repository
            .create_promo(NewPromoCode {
                code: command.code().to_string(),
                description: command.description().map(|s| s.to_string()),
                duration_days: command.duration_days(),
                max_redemptions: command.max_redemptions(),
                assigned_user_id: command.assigned_user_id(),
                expires_at: command.expires_at(),
            })
            .await
            .map_err(|e| match e {
                PromoRepositoryError::DuplicateCode => CreatePromoError::DuplicateCode,
                other => CreatePromoError::RepositoryError(other.to_string()),
            })
    }
}

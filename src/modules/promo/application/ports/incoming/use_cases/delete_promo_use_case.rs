use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePromoError {
    #[error("Promo code not found")]
    PromoNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePromoUseCase: Send + Sync {
    async fn execute(&self, promo_id: Uuid) -> Result<(), DeletePromoError>;
}

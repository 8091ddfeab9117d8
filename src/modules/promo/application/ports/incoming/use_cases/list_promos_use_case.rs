use async_trait::async_trait;

use crate::promo::application::domain::entities::PromoCode;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPromosError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListPromosUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PromoCode>, ListPromosError>;
}

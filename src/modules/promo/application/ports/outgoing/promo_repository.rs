use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::promo::application::domain::entities::PromoCode;

#[derive(Debug, Clone)]
pub struct NewPromoCode {
    pub code: String,
    pub description: Option<String>,
    pub duration_days: i32,
    pub max_redemptions: Option<i32>,
    pub assigned_user_id: Option<Uuid>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PromoRepositoryError {
    #[error("Promo code not found")]
    PromoNotFound,

    #[error("Duplicate promo code")]
    DuplicateCode,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PromoRepository: Send + Sync {
    /// Newest first.
    async fn list_promos(&self) -> Result<Vec<PromoCode>, PromoRepositoryError>;

    async fn create_promo(&self, data: NewPromoCode) -> Result<PromoCode, PromoRepositoryError>;

    async fn delete_promo(&self, promo_id: Uuid) -> Result<(), PromoRepositoryError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<PromoCode>, PromoRepositoryError>;

    /// Increments `current_redemptions` only while the counter is still
    /// below the cap. Returns `false` when the guard lost, so two
    /// concurrent redeems of the last slot cannot both win.
    async fn redeem(&self, promo_id: Uuid) -> Result<bool, PromoRepositoryError>;

    /// Hands a won redemption slot back when the grant it paid for could
    /// not be applied. Guarded so the counter never goes below zero.
    async fn release(&self, promo_id: Uuid) -> Result<(), PromoRepositoryError>;
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::PlanType;
use crate::billing::application::domain::entities::BillingProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BillingRepositoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PremiumRepository: Send + Sync {
    async fn fetch_billing_profile(
        &self,
        user_id: Uuid,
    ) -> Result<BillingProfile, BillingRepositoryError>;

    /// Writes the premium fields after a paid session or a promo
    /// redemption. `expires_at` is `None` for lifetime plans.
    async fn activate_premium(
        &self,
        user_id: Uuid,
        plan: PlanType,
        expires_at: Option<DateTime<Utc>>,
        subscription_id: Option<String>,
    ) -> Result<(), BillingRepositoryError>;
}

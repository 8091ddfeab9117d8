use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::domain::entities::PlanType;
use crate::billing::application::domain::premium::is_effectively_premium;
use crate::billing::application::ports::outgoing::{
    BillingGateway, BillingRepositoryError, PremiumRepository, SubscriptionState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionFlag {
    Active,
    Cancelled,
    None,
}

impl SubscriptionFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionFlag::Active => "active",
            SubscriptionFlag::Cancelled => "cancelled",
            SubscriptionFlag::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionStatusResult {
    pub premium: bool,
    pub plan_type: Option<PlanType>,
    pub status: SubscriptionFlag,
    pub access_until: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub enum SubscriptionStatusError {
    UserNotFound,
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait ISubscriptionStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
    ) -> Result<SubscriptionStatusResult, SubscriptionStatusError>;
}

pub struct SubscriptionStatusUseCase<R, G>
where
    R: PremiumRepository,
    G: BillingGateway,
{
    repository: R,
    gateway: G,
}

impl<R, G> SubscriptionStatusUseCase<R, G>
where
    R: PremiumRepository,
    G: BillingGateway,
{
    pub fn new(repository: R, gateway: G) -> Self {
        Self {
            repository,
            gateway,
        }
    }
}

#[async_trait::async_trait]
impl<R, G> ISubscriptionStatusUseCase for SubscriptionStatusUseCase<R, G>
where
    R: PremiumRepository + Send + Sync,
    G: BillingGateway + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
    ) -> Result<SubscriptionStatusResult, SubscriptionStatusError> {
        let profile = self
            .repository
            .fetch_billing_profile(user_id)
            .await
            .map_err(|err| match err {
                BillingRepositoryError::UserNotFound => SubscriptionStatusError::UserNotFound,
                BillingRepositoryError::DatabaseError(msg) => {
                    SubscriptionStatusError::RepositoryError(msg)
                }
            })?;

        let now = Utc::now();
        let premium = is_effectively_premium(
            profile.is_premium,
            profile.plan_type,
            profile.premium_expires_at,
            now,
        );

        if !premium {
            return Ok(SubscriptionStatusResult {
                premium: false,
                plan_type: None,
                status: SubscriptionFlag::None,
                access_until: None,
            });
        }

        // Secondary reconciliation: a gateway-side cancellation is
        // reported but never revokes access before the paid-for expiry.
        let mut status = SubscriptionFlag::Active;
        if let Some(subscription_id) = &profile.subscription_id {
            match self.gateway.fetch_subscription(subscription_id).await {
                Ok(SubscriptionState::Canceled) => status = SubscriptionFlag::Cancelled,
                Ok(_) => {}
                Err(e) => {
                    warn!("Subscription lookup degraded to local state: {}", e);
                }
            }
        }

        Ok(SubscriptionStatusResult {
            premium: true,
            plan_type: profile.plan_type,
            status,
            access_until: profile.premium_expires_at,
        })
    }
}

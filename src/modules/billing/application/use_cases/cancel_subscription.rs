use chrono::{DateTime, Utc};
use tracing::error;
use uuid::Uuid;

use crate::billing::application::ports::outgoing::{
    BillingGateway, BillingRepositoryError, PremiumRepository,
};

#[derive(Debug, Clone)]
pub enum CancelSubscriptionError {
    UserNotFound,
    NoActiveSubscription,
    GatewayError,
    RepositoryError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CancelOutcome {
    /// Paid-for access continues until this moment; cancellation only
    /// stops renewal.
    pub access_until: Option<DateTime<Utc>>,
}

#[async_trait::async_trait]
pub trait ICancelSubscriptionUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<CancelOutcome, CancelSubscriptionError>;
}

pub struct CancelSubscriptionUseCase<R, G>
where
    R: PremiumRepository,
    G: BillingGateway,
{
    repository: R,
    gateway: G,
}

impl<R, G> CancelSubscriptionUseCase<R, G>
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
impl<R, G> ICancelSubscriptionUseCase for CancelSubscriptionUseCase<R, G>
where
    R: PremiumRepository + Send + Sync,
    G: BillingGateway + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<CancelOutcome, CancelSubscriptionError> {
        let profile = self
            .repository
            .fetch_billing_profile(user_id)
            .await
            .map_err(|err| match err {
                BillingRepositoryError::UserNotFound => CancelSubscriptionError::UserNotFound,
                BillingRepositoryError::DatabaseError(msg) => {
                    CancelSubscriptionError::RepositoryError(msg)
                }
            })?;

        let subscription_id = profile
            .subscription_id
            .ok_or(CancelSubscriptionError::NoActiveSubscription)?;

        self.gateway
            .cancel_subscription(&subscription_id)
            .await
            .map_err(|err| {
                error!("Subscription cancellation failed: {}", err);
                CancelSubscriptionError::GatewayError
            })?;

        Ok(CancelOutcome {
            access_until: profile.premium_expires_at,
        })
    }
}

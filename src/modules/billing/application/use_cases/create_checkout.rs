use tracing::error;
use uuid::Uuid;

use crate::auth::application::domain::entities::PlanType;
use crate::billing::application::ports::outgoing::{
    BillingGateway, BillingGatewayError, BillingRepositoryError, CheckoutSession,
    PremiumRepository,
};

#[derive(Debug, Clone)]
pub enum CreateCheckoutError {
    UserNotFound,
    GatewayError,
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait ICreateCheckoutUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        plan: PlanType,
    ) -> Result<CheckoutSession, CreateCheckoutError>;
}

pub struct CreateCheckoutUseCase<R, G>
where
    R: PremiumRepository,
    G: BillingGateway,
{
    repository: R,
    gateway: G,
}

impl<R, G> CreateCheckoutUseCase<R, G>
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
impl<R, G> ICreateCheckoutUseCase for CreateCheckoutUseCase<R, G>
where
    R: PremiumRepository + Send + Sync,
    G: BillingGateway + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        plan: PlanType,
    ) -> Result<CheckoutSession, CreateCheckoutError> {
        let profile = self
            .repository
            .fetch_billing_profile(user_id)
            .await
            .map_err(|err| match err {
                BillingRepositoryError::UserNotFound => CreateCheckoutError::UserNotFound,
                BillingRepositoryError::DatabaseError(msg) => {
                    CreateCheckoutError::RepositoryError(msg)
                }
            })?;

        self.gateway
            .create_checkout_session(user_id, &profile.email, plan)
            .await
            .map_err(|err: BillingGatewayError| {
                // Detail stays in the log; callers get a generic error.
                error!("Checkout session creation failed: {}", err);
                CreateCheckoutError::GatewayError
            })
    }
}

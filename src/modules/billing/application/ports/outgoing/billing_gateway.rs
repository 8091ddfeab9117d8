use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::PlanType;

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSession {
    pub session_id: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Paid,
    Pending,
    Expired,
}

/// Gateway view of a checkout session, fetched during verification.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewaySession {
    pub session_id: String,
    pub gateway: String,
    pub status: SessionStatus,
    pub plan: PlanType,
    pub amount_cents: i64,
    pub currency: String,
    pub subscription_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    Active,
    Canceled,
    PastDue,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BillingGatewayError {
    #[error("Session not found")]
    SessionNotFound,

    #[error("Subscription not found")]
    SubscriptionNotFound,

    #[error("Gateway unreachable: {0}")]
    Unreachable(String),

    #[error("Unexpected gateway response: {0}")]
    InvalidResponse(String),
}

/// The payment provider behind the billing surface. Checkout, session
/// verification and subscription lifecycle are all delegated; only the
/// derived premium state lives in this system.
#[async_trait]
pub trait BillingGateway: Send + Sync {
    async fn create_checkout_session(
        &self,
        user_id: Uuid,
        email: &str,
        plan: PlanType,
    ) -> Result<CheckoutSession, BillingGatewayError>;

    async fn fetch_session(&self, session_id: &str)
        -> Result<GatewaySession, BillingGatewayError>;

    async fn fetch_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<SubscriptionState, BillingGatewayError>;

    async fn cancel_subscription(&self, subscription_id: &str)
        -> Result<(), BillingGatewayError>;
}

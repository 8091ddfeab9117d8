use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use uuid::Uuid;

use crate::auth::application::domain::entities::PlanType;
use crate::billing::application::ports::outgoing::{
    BillingGateway, BillingGatewayError, CheckoutSession, GatewaySession, SessionStatus,
    SubscriptionState,
};

#[derive(Debug, Clone)]
pub struct BillingGatewayConfig {
    pub base_url: String,
    pub secret_key: String,
    pub gateway_name: String,
}

impl BillingGatewayConfig {
    /// Load gateway configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env::var("BILLING_GATEWAY_URL").expect("BILLING_GATEWAY_URL must be set");
        let secret_key =
            env::var("BILLING_GATEWAY_SECRET").expect("BILLING_GATEWAY_SECRET must be set");
        let gateway_name =
            env::var("BILLING_GATEWAY_NAME").unwrap_or_else(|_| "stripe".to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key,
            gateway_name,
        }
    }
}

/// JSON client for the payment provider's checkout and subscription API.
#[derive(Clone)]
pub struct HttpBillingGateway {
    client: Client,
    config: BillingGatewayConfig,
}

impl HttpBillingGateway {
    pub fn new(config: BillingGatewayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[derive(Serialize)]
struct CreateSessionRequest<'a> {
    client_reference_id: Uuid,
    customer_email: &'a str,
    plan: &'a str,
}

#[derive(Deserialize)]
struct CreateSessionResponse {
    id: String,
    url: String,
}

#[derive(Deserialize)]
struct SessionResponse {
    id: String,
    payment_status: String,
    plan: String,
    amount_total: i64,
    currency: String,
    subscription: Option<String>,
}

#[derive(Deserialize)]
struct SubscriptionResponse {
    status: String,
}

fn map_transport_error(err: reqwest::Error) -> BillingGatewayError {
    BillingGatewayError::Unreachable(err.to_string())
}

#[async_trait]
impl BillingGateway for HttpBillingGateway {
    async fn create_checkout_session(
        &self,
        user_id: Uuid,
        email: &str,
        plan: PlanType,
    ) -> Result<CheckoutSession, BillingGatewayError> {
        let body = CreateSessionRequest {
            client_reference_id: user_id,
            customer_email: email,
            plan: plan.as_str(),
        };

        let response = self
            .client
            .post(format!("{}/checkout/sessions", self.config.base_url))
            .bearer_auth(&self.config.secret_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(BillingGatewayError::InvalidResponse(format!(
                "checkout session creation returned {}",
                response.status()
            )));
        }

        let created: CreateSessionResponse = response
            .json()
            .await
            .map_err(|e| BillingGatewayError::InvalidResponse(e.to_string()))?;

        Ok(CheckoutSession {
            session_id: created.id,
            url: created.url,
        })
    }

    async fn fetch_session(
        &self,
        session_id: &str,
    ) -> Result<GatewaySession, BillingGatewayError> {
        let response = self
            .client
            .get(format!(
                "{}/checkout/sessions/{}",
                self.config.base_url, session_id
            ))
            .bearer_auth(&self.config.secret_key)
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BillingGatewayError::SessionNotFound);
        }
        if !response.status().is_success() {
            return Err(BillingGatewayError::InvalidResponse(format!(
                "session lookup returned {}",
                response.status()
            )));
        }

        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| BillingGatewayError::InvalidResponse(e.to_string()))?;

        let status = match session.payment_status.as_str() {
            "paid" => SessionStatus::Paid,
            "unpaid" | "pending" => SessionStatus::Pending,
            "expired" => SessionStatus::Expired,
            other => {
                return Err(BillingGatewayError::InvalidResponse(format!(
                    "unknown payment status '{}'",
                    other
                )))
            }
        };

        let plan = PlanType::parse(&session.plan).ok_or_else(|| {
            BillingGatewayError::InvalidResponse(format!("unknown plan '{}'", session.plan))
        })?;

        Ok(GatewaySession {
            session_id: session.id,
            gateway: self.config.gateway_name.clone(),
            status,
            plan,
            amount_cents: session.amount_total,
            currency: session.currency,
            subscription_id: session.subscription,
        })
    }

    async fn fetch_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<SubscriptionState, BillingGatewayError> {
        let response = self
            .client
            .get(format!(
                "{}/subscriptions/{}",
                self.config.base_url, subscription_id
            ))
            .bearer_auth(&self.config.secret_key)
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BillingGatewayError::SubscriptionNotFound);
        }
        if !response.status().is_success() {
            return Err(BillingGatewayError::InvalidResponse(format!(
                "subscription lookup returned {}",
                response.status()
            )));
        }

        let subscription: SubscriptionResponse = response
            .json()
            .await
            .map_err(|e| BillingGatewayError::InvalidResponse(e.to_string()))?;

        match subscription.status.as_str() {
            "active" | "trialing" => Ok(SubscriptionState::Active),
            "canceled" => Ok(SubscriptionState::Canceled),
            "past_due" | "unpaid" => Ok(SubscriptionState::PastDue),
            other => Err(BillingGatewayError::InvalidResponse(format!(
                "unknown subscription status '{}'",
                other
            ))),
        }
    }

    async fn cancel_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<(), BillingGatewayError> {
        let response = self
            .client
            .delete(format!(
                "{}/subscriptions/{}",
                self.config.base_url, subscription_id
            ))
            .bearer_auth(&self.config.secret_key)
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BillingGatewayError::SubscriptionNotFound);
        }
        if !response.status().is_success() {
            return Err(BillingGatewayError::InvalidResponse(format!(
                "subscription cancel returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}

use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::billing::application::use_cases::cancel_subscription::CancelSubscriptionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct CancelSubscriptionResponse {
    pub cancelled: bool,
    pub access_until: Option<String>,
}

#[post("/api/billing/cancel-subscription")]
pub async fn cancel_subscription_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .cancel_subscription_use_case
        .execute(user.user_id)
        .await
    {
        Ok(outcome) => {
            info!(user_id = %user.user_id, "Subscription cancelled");
            ApiResponse::success(CancelSubscriptionResponse {
                cancelled: true,
                access_until: outcome.access_until.map(|t| t.to_rfc3339()),
            })
        }
        Err(CancelSubscriptionError::NoActiveSubscription) => {
            ApiResponse::bad_request("NO_ACTIVE_SUBSCRIPTION", "No active subscription to cancel")
        }
        Err(CancelSubscriptionError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(CancelSubscriptionError::GatewayError) => {
            ApiResponse::bad_gateway("UPSTREAM_ERROR", "Payment provider is unavailable")
        }
        Err(CancelSubscriptionError::RepositoryError(e)) => {
            error!("Repository error cancelling subscription: {}", e);
            ApiResponse::internal_error()
        }
    }
}

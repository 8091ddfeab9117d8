use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::PlanType;
use crate::billing::application::use_cases::create_checkout::CreateCheckoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCheckoutRequest {
    pub plan: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCheckoutResponse {
    pub session_id: String,
    pub url: String,
}

#[post("/api/billing/create-checkout-session")]
pub async fn create_checkout_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateCheckoutRequest>,
) -> impl Responder {
    let Some(plan) = PlanType::parse(&payload.plan) else {
        return ApiResponse::bad_request("INVALID_PLAN", "Plan must be 'monthly' or 'lifetime'");
    };

    match data.create_checkout_use_case.execute(user.user_id, plan).await {
        Ok(session) => ApiResponse::success(CreateCheckoutResponse {
            session_id: session.session_id,
            url: session.url,
        }),
        Err(CreateCheckoutError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(CreateCheckoutError::GatewayError) => {
            ApiResponse::bad_gateway("UPSTREAM_ERROR", "Payment provider is unavailable")
        }
        Err(CreateCheckoutError::RepositoryError(e)) => {
            error!("Repository error creating checkout session: {}", e);
            ApiResponse::internal_error()
        }
    }
}

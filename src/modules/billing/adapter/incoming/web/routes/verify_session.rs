use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::billing::application::use_cases::verify_session::VerifySessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct VerifySessionRequest {
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifySessionResponse {
    pub premium: bool,
    pub plan_type: String,
    pub transaction_id: String,
}

#[post("/api/billing/verify-session")]
pub async fn verify_session_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<VerifySessionRequest>,
) -> impl Responder {
    match data
        .verify_session_use_case
        .execute(user.user_id, &payload.session_id)
        .await
    {
        Ok(verified) => {
            info!(user_id = %user.user_id, plan = verified.plan.as_str(), "Premium activated");
            ApiResponse::success(VerifySessionResponse {
                premium: true,
                plan_type: verified.plan.as_str().to_string(),
                transaction_id: verified.transaction.id.to_string(),
            })
        }
        Err(VerifySessionError::SessionNotFound) => {
            ApiResponse::not_found("SESSION_NOT_FOUND", "Checkout session not found")
        }
        Err(VerifySessionError::SessionNotPaid) => {
            ApiResponse::bad_request("SESSION_NOT_PAID", "Checkout session has not been paid")
        }
        Err(VerifySessionError::GatewayError) => {
            ApiResponse::bad_gateway("UPSTREAM_ERROR", "Payment provider is unavailable")
        }
        Err(VerifySessionError::RepositoryError(e)) => {
            error!("Repository error verifying session: {}", e);
            ApiResponse::internal_error()
        }
    }
}

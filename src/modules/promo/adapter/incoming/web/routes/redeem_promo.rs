use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::promo::application::ports::incoming::use_cases::{
    RedeemPromoCommand, RedeemPromoError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RedeemPromoRequest {
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RedeemPromoResponse {
    pub premium: bool,
    pub duration_days: i32,
    pub premium_expires_at: Option<String>,
}

#[post("/api/promo/redeem")]
pub async fn redeem_promo_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<RedeemPromoRequest>,
) -> impl Responder {
    let command = match RedeemPromoCommand::new(user.user_id, payload.into_inner().code) {
        Ok(c) => c,
        // An empty code can't match anything, same outcome as unknown
        Err(_) => return ApiResponse::bad_request("PROMO_INVALID", "Promo code is not valid"),
    };

    match data.promo_use_cases.redeem.execute(command).await {
        Ok(result) => ApiResponse::success(RedeemPromoResponse {
            premium: true,
            duration_days: result.duration_days,
            premium_expires_at: result.premium_expires_at.map(|t| t.to_rfc3339()),
        }),
        Err(RedeemPromoError::PromoInvalid) => {
            ApiResponse::bad_request("PROMO_INVALID", "Promo code is not valid")
        }
        Err(RedeemPromoError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(RedeemPromoError::RepositoryError(e)) => {
            error!("Repository error redeeming promo: {}", e);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::refresh_token::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    /// Refresh token issued at login
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshTokenResponseBody {
    /// New access token
    pub access_token: String,
}

/// Exchange a refresh token for a fresh access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (
            status = 200,
            description = "New access token issued",
            body = inline(SuccessResponse<RefreshTokenResponseBody>)
        ),
        (status = 401, description = "Invalid or expired refresh token", body = ErrorResponse)
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    data: web::Data<AppState>,
    payload: web::Json<RefreshTokenRequestDto>,
) -> impl Responder {
    match data
        .refresh_token_use_case
        .execute(&payload.refresh_token)
        .await
    {
        Ok(access_token) => ApiResponse::success(RefreshTokenResponseBody { access_token }),
        Err(RefreshTokenError::TokenExpired) => {
            ApiResponse::unauthorized("TOKEN_EXPIRED", "Refresh token has expired")
        }
        Err(RefreshTokenError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }
    }
}

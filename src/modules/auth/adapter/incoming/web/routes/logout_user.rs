use actix_web::{post, web, HttpRequest, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::extract_token_from_header;
use crate::auth::application::use_cases::logout_user::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out")]
    pub message: String,
}

/// Revoke the presented access token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (
            status = 200,
            description = "Token revoked",
            body = inline(SuccessResponse<LogoutResponseBody>)
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let token = match extract_token_from_header(&req) {
        Some(t) => t,
        None => {
            return ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            )
        }
    };

    match data.logout_user_use_case.execute(&token).await {
        Ok(()) => ApiResponse::success(LogoutResponseBody {
            message: "Logged out".to_string(),
        }),
        Err(LogoutError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        Err(LogoutError::RepositoryError(msg)) => {
            error!("Logout storage error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

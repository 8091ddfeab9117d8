use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginRequest, LoginUserError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token (short-lived)
    pub access_token: String,

    /// JWT refresh token (long-lived)
    pub refresh_token: String,

    /// Authenticated user information
    pub user: LoginUserInfo,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserInfo {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    /// Username
    #[schema(example = "johndoe")]
    pub username: String,

    /// Whether the user holds an admin role
    #[schema(example = false)]
    pub is_admin: bool,
}

/// User login
///
/// Authenticates with email and password. Banned accounts are rejected with
/// the stored ban reason.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = inline(serde_json::Value),
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>)
        ),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Account banned", body = ErrorResponse)
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> impl Responder {
    match data.login_user_use_case.execute(payload.into_inner()).await {
        Ok(result) => {
            info!(user_id = %result.user_id, "User logged in");
            ApiResponse::success(LoginResponse {
                access_token: result.access_token,
                refresh_token: result.refresh_token,
                user: LoginUserInfo {
                    id: result.user_id.to_string(),
                    username: result.username,
                    is_admin: result.is_admin,
                },
            })
        }
        Err(LoginUserError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(LoginUserError::AccountBanned(reason)) => {
            ApiResponse::forbidden("ACCOUNT_BANNED", &reason)
        }
        Err(LoginUserError::TokenGenerationFailed) => {
            error!("Token generation failed during login");
            ApiResponse::internal_error()
        }
        Err(LoginUserError::RepositoryError(msg)) => {
            error!("Login repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

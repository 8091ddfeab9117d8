use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::register_user::{
    RegisterUserError, RegisterUserRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    /// Email address
    #[schema(example = "john@example.com")]
    pub email: String,

    /// Auto-generated starter username
    #[schema(example = "willow4821")]
    pub username: String,

    /// Display name
    #[schema(example = "John Doe")]
    pub display_name: String,
}

/// Register a new account
///
/// Creates a user with an auto-generated username. The username can be
/// replaced exactly once through the claim endpoint.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = inline(serde_json::Value),
    responses(
        (
            status = 201,
            description = "Account created",
            body = inline(SuccessResponse<RegisterUserResponse>)
        ),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<RegisterUserRequest>,
) -> impl Responder {
    match data.register_user_use_case.execute(payload.into_inner()).await {
        Ok(user) => ApiResponse::created(RegisterUserResponse {
            id: user.id.to_string(),
            email: user.email,
            username: user.username,
            display_name: user.display_name,
        }),
        Err(RegisterUserError::EmailTaken) => {
            ApiResponse::conflict("EMAIL_TAKEN", "Email is already registered")
        }
        Err(RegisterUserError::HashingFailed) => {
            error!("Password hashing failed during registration");
            ApiResponse::internal_error()
        }
        Err(RegisterUserError::RepositoryError(msg)) => {
            error!("Registration repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

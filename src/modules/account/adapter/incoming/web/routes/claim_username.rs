use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::account::application::use_cases::claim_username::ClaimUsernameError;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct ClaimUsernameRequest {
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClaimUsernameResponse {
    pub username: String,
}

#[post("/api/user/username")]
pub async fn claim_username_handler(
    user: AuthenticatedUser,
    req: web::Json<ClaimUsernameRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .claim_username_use_case
        .execute(user.user_id, &req.username)
        .await
    {
        Ok(username) => ApiResponse::success(ClaimUsernameResponse { username }),
        Err(ClaimUsernameError::AlreadyClaimed) => ApiResponse::conflict(
            "USERNAME_ALREADY_CLAIMED",
            "Username has already been claimed for this account",
        ),
        Err(ClaimUsernameError::InvalidFormat(e)) => {
            ApiResponse::bad_request("INVALID_USERNAME", e.message())
        }
        Err(ClaimUsernameError::AlreadyTaken) => {
            ApiResponse::conflict("USERNAME_TAKEN", "Username is already taken")
        }
        Err(ClaimUsernameError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(ClaimUsernameError::RepositoryError(e)) => {
            error!("Repository error claiming username: {}", e);
            ApiResponse::internal_error()
        }
    }
}

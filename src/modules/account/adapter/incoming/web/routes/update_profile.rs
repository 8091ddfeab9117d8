use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::account::application::ports::outgoing::PatchProfileData;
use crate::account::application::use_cases::update_profile::UpdateProfileError;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::get_profile::ProfileResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub image_path: Option<String>,
}

#[patch("/api/user/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patch_data = PatchProfileData {
        display_name: req.display_name.clone(),
        bio: req.bio.clone(),
        image_path: req.image_path.clone(),
    };

    match data
        .update_profile_use_case
        .execute(user.user_id, patch_data)
        .await
    {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),
        Err(UpdateProfileError::DisplayNameEmpty) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Display name cannot be empty")
        }
        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateProfileError::RepositoryError(e)) => {
            error!("Repository error updating profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

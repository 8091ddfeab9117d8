use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::account::application::domain::entities::Profile;
use crate::account::application::use_cases::get_profile::GetProfileError;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub image_path: Option<String>,
    pub background_path: Option<String>,
    pub has_custom_username: bool,
    pub is_published: bool,
    pub is_premium: bool,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id.to_string(),
            email: p.email,
            username: p.username,
            display_name: p.display_name,
            bio: p.bio,
            image_path: p.image_path,
            background_path: p.background_path,
            has_custom_username: p.has_custom_username,
            is_published: p.is_published,
            is_premium: p.is_premium,
        }
    }
}

#[get("/api/user/profile")]
pub async fn get_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_profile_use_case.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(ProfileResponse::from(profile)),
        Err(GetProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetProfileError::RepositoryError(e)) => {
            error!("Repository error fetching profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

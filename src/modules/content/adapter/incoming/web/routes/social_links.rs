use actix_web::{delete, get, patch, post, put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::content::application::domain::entities::LinkItem;
use crate::content::application::ports::incoming::use_cases::{
    CreateLinkCommand, CreateLinkError, DeleteLinkError, GetLinksError, ReorderLinksCommand,
    ReorderLinksError, UpdateLinkCommand, UpdateLinkError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::bio_links::SetOrderRequest;

#[derive(Debug, Clone, Serialize)]
pub struct SocialLinkResponse {
    pub id: String,
    pub platform: String,
    pub url: String,
    pub position: i32,
}

impl From<LinkItem> for SocialLinkResponse {
    fn from(l: LinkItem) -> Self {
        Self {
            id: l.id.to_string(),
            platform: l.label,
            url: l.url,
            position: l.position,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSocialLinkRequest {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSocialLinkRequest {
    pub platform: Option<String>,
    pub url: Option<String>,
}

#[get("/api/socials")]
pub async fn get_social_links_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .social_link_use_cases
        .get_list
        .execute(user.user_id)
        .await
    {
        Ok(links) => ApiResponse::success(
            links
                .into_iter()
                .map(SocialLinkResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(GetLinksError::RepositoryError(e)) => {
            error!("Repository error listing social links: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/socials")]
pub async fn create_social_link_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateSocialLinkRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command =
        match CreateLinkCommand::new(user.user_id, req.platform.clone(), req.url.clone()) {
            Ok(c) => c,
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        };

    match data.social_link_use_cases.create.execute(command).await {
        Ok(link) => ApiResponse::created(SocialLinkResponse::from(link)),
        Err(CreateLinkError::RepositoryError(e)) => {
            error!("Repository error creating social link: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/socials/{id}")]
pub async fn update_social_link_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateSocialLinkRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UpdateLinkCommand::new(
        user.user_id,
        path.into_inner(),
        req.platform.clone(),
        req.url.clone(),
    ) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.social_link_use_cases.update.execute(command).await {
        Ok(link) => ApiResponse::success(SocialLinkResponse::from(link)),
        Err(UpdateLinkError::LinkNotFound) => {
            ApiResponse::not_found("LINK_NOT_FOUND", "Social link not found")
        }
        Err(UpdateLinkError::RepositoryError(e)) => {
            error!("Repository error updating social link: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/socials/{id}")]
pub async fn delete_social_link_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .social_link_use_cases
        .delete
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::success(serde_json::json!({ "deleted": true })),
        Err(DeleteLinkError::LinkNotFound) => {
            ApiResponse::not_found("LINK_NOT_FOUND", "Social link not found")
        }
        Err(DeleteLinkError::RepositoryError(e)) => {
            error!("Repository error deleting social link: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/socials/order")]
pub async fn reorder_social_links_handler(
    user: AuthenticatedUser,
    req: web::Json<SetOrderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ReorderLinksCommand::new(user.user_id, req.order.clone()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.social_link_use_cases.reorder.execute(command).await {
        Ok(()) => ApiResponse::success(serde_json::json!({ "reordered": true })),
        Err(ReorderLinksError::IdMismatch) => ApiResponse::bad_request(
            "ORDER_MISMATCH",
            "Order list must contain exactly your social link ids",
        ),
        Err(ReorderLinksError::RepositoryError(e)) => {
            error!("Repository error reordering social links: {}", e);
            ApiResponse::internal_error()
        }
    }
}

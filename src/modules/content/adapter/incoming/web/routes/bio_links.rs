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

#[derive(Debug, Clone, Serialize)]
pub struct BioLinkResponse {
    pub id: String,
    pub title: String,
    pub url: String,
    pub position: i32,
}

impl From<LinkItem> for BioLinkResponse {
    fn from(l: LinkItem) -> Self {
        Self {
            id: l.id.to_string(),
            title: l.label,
            url: l.url,
            position: l.position,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBioLinkRequest {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBioLinkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetOrderRequest {
    pub order: Vec<Uuid>,
}

#[get("/api/links")]
pub async fn get_bio_links_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.bio_link_use_cases.get_list.execute(user.user_id).await {
        Ok(links) => ApiResponse::success(
            links
                .into_iter()
                .map(BioLinkResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(GetLinksError::RepositoryError(e)) => {
            error!("Repository error listing links: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/links")]
pub async fn create_bio_link_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateBioLinkRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command =
        match CreateLinkCommand::new(user.user_id, req.title.clone(), req.url.clone()) {
            Ok(c) => c,
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        };

    match data.bio_link_use_cases.create.execute(command).await {
        Ok(link) => ApiResponse::created(BioLinkResponse::from(link)),
        Err(CreateLinkError::RepositoryError(e)) => {
            error!("Repository error creating link: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/links/{id}")]
pub async fn update_bio_link_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateBioLinkRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UpdateLinkCommand::new(
        user.user_id,
        path.into_inner(),
        req.title.clone(),
        req.url.clone(),
    ) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.bio_link_use_cases.update.execute(command).await {
        Ok(link) => ApiResponse::success(BioLinkResponse::from(link)),
        Err(UpdateLinkError::LinkNotFound) => {
            ApiResponse::not_found("LINK_NOT_FOUND", "Link not found")
        }
        Err(UpdateLinkError::RepositoryError(e)) => {
            error!("Repository error updating link: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/links/{id}")]
pub async fn delete_bio_link_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .bio_link_use_cases
        .delete
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::success(serde_json::json!({ "deleted": true })),
        Err(DeleteLinkError::LinkNotFound) => {
            ApiResponse::not_found("LINK_NOT_FOUND", "Link not found")
        }
        Err(DeleteLinkError::RepositoryError(e)) => {
            error!("Repository error deleting link: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/links/order")]
pub async fn reorder_bio_links_handler(
    user: AuthenticatedUser,
    req: web::Json<SetOrderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ReorderLinksCommand::new(user.user_id, req.order.clone()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.bio_link_use_cases.reorder.execute(command).await {
        Ok(()) => ApiResponse::success(serde_json::json!({ "reordered": true })),
        Err(ReorderLinksError::IdMismatch) => ApiResponse::bad_request(
            "ORDER_MISMATCH",
            "Order list must contain exactly your link ids",
        ),
        Err(ReorderLinksError::RepositoryError(e)) => {
            error!("Repository error reordering links: {}", e);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{delete, get, post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::promo::application::domain::entities::PromoCode;
use crate::promo::application::ports::incoming::use_cases::{
    CreatePromoCommand, CreatePromoError, DeletePromoError, ListPromosError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct PromoResponse {
    pub id: String,
    pub code: String,
    pub description: Option<String>,
    pub duration_days: i32,
    pub max_redemptions: Option<i32>,
    pub current_redemptions: i32,
    pub assigned_user_id: Option<String>,
    pub expires_at: Option<String>,
    pub is_active: bool,
    pub status: String,
    pub created_at: String,
}

impl PromoResponse {
    pub fn from_domain(promo: PromoCode) -> Self {
        let status = promo.status(Utc::now());
        Self {
            id: promo.id.to_string(),
            code: promo.code,
            description: promo.description,
            duration_days: promo.duration_days,
            max_redemptions: promo.max_redemptions,
            current_redemptions: promo.current_redemptions,
            assigned_user_id: promo.assigned_user_id.map(|id| id.to_string()),
            expires_at: promo.expires_at.map(|t| t.to_rfc3339()),
            is_active: promo.is_active,
            status: status.as_str().to_string(),
            created_at: promo.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePromoRequest {
    pub code: String,
    pub description: Option<String>,
    pub duration_days: i32,
    pub max_redemptions: Option<i32>,
    pub assigned_user_id: Option<Uuid>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[get("/api/admin/promos")]
pub async fn list_promos_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.promo_use_cases.list.execute().await {
        Ok(promos) => ApiResponse::success(
            promos
                .into_iter()
                .map(PromoResponse::from_domain)
                .collect::<Vec<_>>(),
        ),
        Err(ListPromosError::RepositoryError(e)) => {
            error!("Repository error listing promos: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/promos")]
pub async fn create_promo_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<CreatePromoRequest>,
) -> impl Responder {
    let body = payload.into_inner();

    let command = match CreatePromoCommand::new(
        body.code,
        body.description,
        body.duration_days,
        body.max_redemptions,
        body.assigned_user_id,
        body.expires_at,
    ) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.promo_use_cases.create.execute(command).await {
        Ok(promo) => {
            info!(admin_id = %admin.user_id, code = %promo.code, "Promo code created");
            ApiResponse::created(PromoResponse::from_domain(promo))
        }
        Err(CreatePromoError::DuplicateCode) => ApiResponse::conflict(
            "DUPLICATE_PROMO_CODE",
            "A promo code with this code already exists",
        ),
        Err(CreatePromoError::RepositoryError(e)) => {
            error!("Repository error creating promo: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/promos/{id}")]
pub async fn delete_promo_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let promo_id = path.into_inner();

    match data.promo_use_cases.delete.execute(promo_id).await {
        Ok(()) => {
            info!(admin_id = %admin.user_id, promo_id = %promo_id, "Promo code deleted");
            ApiResponse::no_content()
        }
        Err(DeletePromoError::PromoNotFound) => {
            ApiResponse::not_found("PROMO_NOT_FOUND", "Promo code not found")
        }
        Err(DeletePromoError::RepositoryError(e)) => {
            error!("Repository error deleting promo: {}", e);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{delete, get, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::admin::application::domain::entities::AdminRecord;
use crate::admin::application::domain::permissions::{validate_permissions, AdminRole};
use crate::admin::application::use_cases::{
    CreateAdminError, DeleteAdminError, GetAdminError, ListAdminsError,
};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct AdminResponse {
    pub id: String,
    pub user_id: String,
    pub role: String,
    pub permissions: Vec<String>,
    pub created_at: String,
}

impl AdminResponse {
    pub fn from_domain(admin: AdminRecord) -> Self {
        Self {
            id: admin.id.to_string(),
            user_id: admin.user_id.to_string(),
            role: admin.role.as_str().to_string(),
            permissions: admin
                .permissions
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            created_at: admin.created_at.to_rfc3339(),
        }
    }
}

#[get("/api/admin/admins")]
pub async fn list_admins_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.admin_use_cases.list_admins.execute().await {
        Ok(admins) => ApiResponse::success(
            admins
                .into_iter()
                .map(AdminResponse::from_domain)
                .collect::<Vec<_>>(),
        ),
        Err(ListAdminsError::RepositoryError(e)) => {
            error!("Repository error listing admins: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateAdminRequest {
    pub user_id: Uuid,
    pub role: String,
    pub permissions: Option<Vec<String>>,
}

#[post("/api/admin/admins")]
pub async fn create_admin_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateAdminRequest>,
) -> impl Responder {
    let body = payload.into_inner();

    let role = match AdminRole::parse(&body.role) {
        Some(role) => role,
        None => return ApiResponse::bad_request("INVALID_ROLE", "Unknown admin role"),
    };

    let overrides = match body.permissions {
        Some(names) => match validate_permissions(&names) {
            Ok(permissions) => Some(permissions),
            Err(detail) => return ApiResponse::bad_request("INVALID_PERMISSION", &detail),
        },
        None => None,
    };

    match data
        .admin_use_cases
        .create_admin
        .execute(body.user_id, role, overrides)
        .await
    {
        Ok(record) => {
            info!(
                admin_id = %admin.user_id,
                new_admin = %record.id,
                role = role.as_str(),
                "Admin created"
            );
            ApiResponse::created(AdminResponse::from_domain(record))
        }
        Err(CreateAdminError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(CreateAdminError::DuplicateAdmin) => {
            ApiResponse::conflict("DUPLICATE_ADMIN", "User is already an admin")
        }
        Err(CreateAdminError::RepositoryError(e)) => {
            error!("Repository error creating admin: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/admins/{id}")]
pub async fn get_admin_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .admin_use_cases
        .get_admin
        .execute(path.into_inner())
        .await
    {
        Ok(record) => ApiResponse::success(AdminResponse::from_domain(record)),
        Err(GetAdminError::AdminNotFound) => {
            ApiResponse::not_found("ADMIN_NOT_FOUND", "Admin not found")
        }
        Err(GetAdminError::RepositoryError(e)) => {
            error!("Repository error fetching admin: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/admins/{id}")]
pub async fn delete_admin_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let admin_id = path.into_inner();

    match data.admin_use_cases.delete_admin.execute(admin_id).await {
        Ok(()) => {
            info!(admin_id = %admin.user_id, revoked = %admin_id, "Admin deleted");
            ApiResponse::no_content()
        }
        Err(DeleteAdminError::AdminNotFound) => {
            ApiResponse::not_found("ADMIN_NOT_FOUND", "Admin not found")
        }
        Err(DeleteAdminError::RepositoryError(e)) => {
            error!("Repository error deleting admin: {}", e);
            ApiResponse::internal_error()
        }
    }
}

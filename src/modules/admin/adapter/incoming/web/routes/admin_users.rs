use actix_web::{delete, get, patch, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::admin::application::ports::outgoing::{PageRequest, PageResult, UserAdminPatch};
use crate::admin::application::use_cases::{
    BanUserError, DeleteUserError, GetUserError, ListUsersError, UpdateUserError,
};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::auth::application::domain::entities::{PlanType, User};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct AdminUserResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub is_published: bool,
    pub is_admin: bool,
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub is_premium: bool,
    pub plan_type: Option<String>,
    pub premium_expires_at: Option<String>,
    pub created_at: String,
}

impl AdminUserResponse {
    pub fn from_domain(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            username: user.username,
            display_name: user.display_name,
            bio: user.bio,
            is_published: user.is_published,
            is_admin: user.is_admin,
            is_banned: user.is_banned,
            ban_reason: user.ban_reason,
            is_premium: user.is_premium,
            plan_type: user.plan_type.map(|p| p.as_str().to_string()),
            premium_expires_at: user.premium_expires_at.map(|t| t.to_rfc3339()),
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub q: Option<String>,

    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub per_page: u32,
}

impl From<&ListUsersQuery> for PageRequest {
    fn from(q: &ListUsersQuery) -> Self {
        PageRequest {
            page: if q.page == 0 { 1 } else { q.page },
            per_page: if q.per_page == 0 { 20 } else { q.per_page },
        }
    }
}

#[get("/api/admin/users")]
pub async fn list_users_handler(
    _admin: AdminUser,
    query: web::Query<ListUsersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageRequest::from(&*query);

    match data
        .admin_use_cases
        .list_users
        .execute(query.into_inner().q, page)
        .await
    {
        Ok(result) => ApiResponse::success(PageResult {
            items: result
                .items
                .into_iter()
                .map(AdminUserResponse::from_domain)
                .collect::<Vec<_>>(),
            page: result.page,
            per_page: result.per_page,
            total: result.total,
        }),
        Err(ListUsersError::RepositoryError(e)) => {
            error!("Repository error listing users: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/users/{id}")]
pub async fn get_user_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin_use_cases.get_user.execute(path.into_inner()).await {
        Ok(user) => ApiResponse::success(AdminUserResponse::from_domain(user)),
        Err(GetUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetUserError::RepositoryError(e)) => {
            error!("Repository error fetching user: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub is_premium: Option<bool>,
    pub plan_type: Option<String>,
}

#[patch("/api/admin/users/{id}")]
pub async fn update_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<UpdateUserRequest>,
) -> impl Responder {
    let user_id = path.into_inner();
    let body = payload.into_inner();

    let plan_type = match body.plan_type {
        Some(raw) => match PlanType::parse(&raw) {
            Some(plan) => Some(Some(plan)),
            None => {
                return ApiResponse::bad_request(
                    "INVALID_PLAN",
                    "Plan must be 'monthly' or 'lifetime'",
                )
            }
        },
        None => None,
    };

    let patch = UserAdminPatch {
        display_name: body.display_name,
        bio: body.bio,
        is_premium: body.is_premium,
        plan_type,
    };

    match data
        .admin_use_cases
        .update_user
        .execute(user_id, patch)
        .await
    {
        Ok(user) => {
            info!(admin_id = %admin.user_id, user_id = %user_id, "User updated by admin");
            ApiResponse::success(AdminUserResponse::from_domain(user))
        }
        Err(UpdateUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateUserError::EmptyDisplayName) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Display name cannot be empty")
        }
        Err(UpdateUserError::RepositoryError(e)) => {
            error!("Repository error updating user: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/users/{id}")]
pub async fn delete_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.admin_use_cases.delete_user.execute(user_id).await {
        Ok(()) => {
            info!(admin_id = %admin.user_id, user_id = %user_id, "User deleted by admin");
            ApiResponse::no_content()
        }
        Err(DeleteUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(DeleteUserError::RepositoryError(e)) => {
            error!("Repository error deleting user: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BanUserRequest {
    pub reason: String,
}

#[post("/api/admin/users/{id}/ban")]
pub async fn ban_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
    payload: web::Json<BanUserRequest>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data
        .admin_use_cases
        .ban_user
        .execute(user_id, payload.into_inner().reason)
        .await
    {
        Ok(user) => {
            info!(admin_id = %admin.user_id, user_id = %user_id, "User banned");
            ApiResponse::success(AdminUserResponse::from_domain(user))
        }
        Err(BanUserError::EmptyReason) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Ban reason is required")
        }
        Err(BanUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(BanUserError::RepositoryError(e)) => {
            error!("Repository error banning user: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/users/{id}/unban")]
pub async fn unban_user_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.admin_use_cases.unban_user.execute(user_id).await {
        Ok(user) => {
            info!(admin_id = %admin.user_id, user_id = %user_id, "User unbanned");
            ApiResponse::success(AdminUserResponse::from_domain(user))
        }
        Err(BanUserError::EmptyReason) => ApiResponse::internal_error(),
        Err(BanUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(BanUserError::RepositoryError(e)) => {
            error!("Repository error unbanning user: {}", e);
            ApiResponse::internal_error()
        }
    }
}

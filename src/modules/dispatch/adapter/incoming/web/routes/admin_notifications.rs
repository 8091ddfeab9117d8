use actix_web::{get, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::dispatch::application::domain::entities::{DispatchTarget, Notification};
use crate::dispatch::application::ports::incoming::use_cases::{
    ListNotificationsError, SendNotificationCommand, SendNotificationError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SendNotificationRequest {
    pub title: String,
    pub body: String,
    pub target: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub target: String,
    pub recipients: i32,
    pub created_at: String,
}

impl NotificationResponse {
    fn from_domain(notification: Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            title: notification.title,
            body: notification.body,
            target: notification.target.render(),
            recipients: notification.recipients,
            created_at: notification.created_at.to_rfc3339(),
        }
    }
}

#[post("/api/admin/notifications/send")]
pub async fn send_notification_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<SendNotificationRequest>,
) -> impl Responder {
    let body = payload.into_inner();

    let Some(target) = DispatchTarget::parse(&body.target) else {
        return ApiResponse::bad_request(
            "VALIDATION_ERROR",
            "Target must be 'all' or 'user:<uuid>'",
        );
    };

    let command = match SendNotificationCommand::new(body.title, body.body, target) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .dispatch_use_cases
        .send_notification
        .execute(command)
        .await
    {
        Ok(notification) => {
            ApiResponse::created(NotificationResponse::from_domain(notification))
        }
        Err(SendNotificationError::TargetNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "Target user not found")
        }
        Err(SendNotificationError::RepositoryError(e)) => {
            error!("Repository error dispatching notification: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/notifications")]
pub async fn list_notifications_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.dispatch_use_cases.list_notifications.execute().await {
        Ok(notifications) => ApiResponse::success(
            notifications
                .into_iter()
                .map(NotificationResponse::from_domain)
                .collect::<Vec<_>>(),
        ),
        Err(ListNotificationsError::RepositoryError(e)) => {
            error!("Repository error listing notifications: {}", e);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{get, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::dispatch::application::domain::entities::{DispatchTarget, SentEmail};
use crate::dispatch::application::ports::incoming::use_cases::{
    GetEmailError, ListEmailsError, SendEmailCommand, SendEmailError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    pub subject: String,
    pub body: String,
    pub target: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentEmailResponse {
    pub id: String,
    pub subject: String,
    pub body: String,
    pub target: String,
    pub recipients: i32,
    pub delivered: i32,
    pub status: String,
    pub created_at: String,
}

impl SentEmailResponse {
    fn from_domain(email: SentEmail) -> Self {
        Self {
            id: email.id.to_string(),
            subject: email.subject,
            body: email.body,
            target: email.target.render(),
            recipients: email.recipients,
            delivered: email.delivered,
            status: email.status.as_str().to_string(),
            created_at: email.created_at.to_rfc3339(),
        }
    }
}

#[post("/api/admin/emails/send")]
pub async fn send_email_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<SendEmailRequest>,
) -> impl Responder {
    let body = payload.into_inner();

    let Some(target) = DispatchTarget::parse(&body.target) else {
        return ApiResponse::bad_request(
            "VALIDATION_ERROR",
            "Target must be 'all' or 'user:<uuid>'",
        );
    };

    let command = match SendEmailCommand::new(body.subject, body.body, target) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.dispatch_use_cases.send_email.execute(command).await {
        Ok(record) => ApiResponse::created(SentEmailResponse::from_domain(record)),
        Err(SendEmailError::TargetNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "Target user not found")
        }
        Err(SendEmailError::RepositoryError(e)) => {
            error!("Repository error dispatching email: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/emails")]
pub async fn list_emails_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.dispatch_use_cases.list_emails.execute().await {
        Ok(emails) => ApiResponse::success(
            emails
                .into_iter()
                .map(SentEmailResponse::from_domain)
                .collect::<Vec<_>>(),
        ),
        Err(ListEmailsError::RepositoryError(e)) => {
            error!("Repository error listing emails: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/emails/{id}")]
pub async fn get_email_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .dispatch_use_cases
        .get_email
        .execute(path.into_inner())
        .await
    {
        Ok(email) => ApiResponse::success(SentEmailResponse::from_domain(email)),
        Err(GetEmailError::EmailNotFound) => {
            ApiResponse::not_found("EMAIL_NOT_FOUND", "Email not found")
        }
        Err(GetEmailError::RepositoryError(e)) => {
            error!("Repository error fetching email: {}", e);
            ApiResponse::internal_error()
        }
    }
}

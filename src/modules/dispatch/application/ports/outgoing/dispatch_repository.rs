use async_trait::async_trait;
use uuid::Uuid;

use crate::dispatch::application::domain::entities::{
    DispatchTarget, EmailStatus, Notification, SentEmail,
};

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub title: String,
    pub body: String,
    pub target: DispatchTarget,
    pub recipients: i32,
}

#[derive(Debug, Clone)]
pub struct NewSentEmail {
    pub subject: String,
    pub body: String,
    pub target: DispatchTarget,
    pub recipients: i32,
    pub delivered: i32,
    pub status: EmailStatus,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DispatchRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Dispatch history. Both record types are append-only; the outcome
/// written at dispatch time is never revised.
#[async_trait]
pub trait DispatchRepository: Send + Sync {
    async fn record_notification(
        &self,
        data: NewNotification,
    ) -> Result<Notification, DispatchRepositoryError>;

    async fn list_notifications(&self) -> Result<Vec<Notification>, DispatchRepositoryError>;

    async fn record_email(&self, data: NewSentEmail)
        -> Result<SentEmail, DispatchRepositoryError>;

    async fn list_emails(&self) -> Result<Vec<SentEmail>, DispatchRepositoryError>;

    async fn find_email(&self, email_id: Uuid)
        -> Result<Option<SentEmail>, DispatchRepositoryError>;
}

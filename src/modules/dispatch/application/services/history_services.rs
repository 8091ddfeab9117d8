use async_trait::async_trait;
use uuid::Uuid;

use crate::dispatch::application::domain::entities::{Notification, SentEmail};
use crate::dispatch::application::ports::{
    incoming::use_cases::{
        GetEmailError, GetEmailUseCase, ListEmailsError, ListEmailsUseCase,
        ListNotificationsError, ListNotificationsUseCase,
    },
    outgoing::DispatchRepository,
};

#[derive(Debug, Clone)]
pub struct ListNotificationsService<R>
where
    R: DispatchRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListNotificationsService<R>
where
    R: DispatchRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListNotificationsUseCase for ListNotificationsService<R>
where
    R: DispatchRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Notification>, ListNotificationsError> {
        self.repository
            .list_notifications()
            .await
            .map_err(|e| ListNotificationsError::RepositoryError(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct ListEmailsService<R>
where
    R: DispatchRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListEmailsService<R>
where
    R: DispatchRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListEmailsUseCase for ListEmailsService<R>
where
    R: DispatchRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SentEmail>, ListEmailsError> {
        self.repository
            .list_emails()
            .await
            .map_err(|e| ListEmailsError::RepositoryError(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct GetEmailService<R>
where
    R: DispatchRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetEmailService<R>
where
    R: DispatchRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetEmailUseCase for GetEmailService<R>
where
    R: DispatchRepository + Send + Sync,
{
    async fn execute(&self, email_id: Uuid) -> Result<SentEmail, GetEmailError> {
        self.repository
            .find_email(email_id)
            .await
            .map_err(|e| GetEmailError::RepositoryError(e.to_string()))?
            .ok_or(GetEmailError::EmailNotFound)
    }
}

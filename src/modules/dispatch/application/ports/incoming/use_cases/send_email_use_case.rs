use async_trait::async_trait;

use crate::dispatch::application::domain::entities::{DispatchTarget, SentEmail};

use super::send_notification_use_case::{validate_body, validate_title, DispatchCommandError};

#[derive(Debug, Clone)]
pub struct SendEmailCommand {
    subject: String,
    body: String,
    target: DispatchTarget,
}

impl SendEmailCommand {
    pub fn new(
        subject: String,
        body: String,
        target: DispatchTarget,
    ) -> Result<Self, DispatchCommandError> {
        Ok(Self {
            subject: validate_title(&subject)?,
            body: validate_body(&body)?,
            target,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn target(&self) -> DispatchTarget {
        self.target
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendEmailError {
    #[error("Target user not found")]
    TargetNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SendEmailUseCase: Send + Sync {
    /// Fans the email out to every resolved recipient and records the
    /// aggregate outcome. Per-recipient failures never fail the call.
    async fn execute(&self, command: SendEmailCommand) -> Result<SentEmail, SendEmailError>;
}

use async_trait::async_trait;

use crate::dispatch::application::domain::entities::{DispatchTarget, Notification};

#[derive(Debug, Clone)]
pub struct SendNotificationCommand {
    title: String,
    body: String,
    target: DispatchTarget,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Body cannot be empty")]
    EmptyBody,
}

pub(crate) fn validate_title(title: &str) -> Result<String, DispatchCommandError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DispatchCommandError::EmptyTitle);
    }
    if title.len() > 200 {
        return Err(DispatchCommandError::TitleTooLong);
    }
    Ok(title.to_string())
}

pub(crate) fn validate_body(body: &str) -> Result<String, DispatchCommandError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(DispatchCommandError::EmptyBody);
    }
    Ok(body.to_string())
}

impl SendNotificationCommand {
    pub fn new(
        title: String,
        body: String,
        target: DispatchTarget,
    ) -> Result<Self, DispatchCommandError> {
        Ok(Self {
            title: validate_title(&title)?,
            body: validate_body(&body)?,
            target,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn target(&self) -> DispatchTarget {
        self.target
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendNotificationError {
    #[error("Target user not found")]
    TargetNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SendNotificationUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SendNotificationCommand,
    ) -> Result<Notification, SendNotificationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_rejected() {
        let err = SendNotificationCommand::new(
            "   ".to_string(),
            "Body".to_string(),
            DispatchTarget::All,
        )
        .unwrap_err();

        assert!(matches!(err, DispatchCommandError::EmptyTitle));
    }

    #[test]
    fn title_and_body_are_trimmed() {
        let command = SendNotificationCommand::new(
            "  Maintenance window  ".to_string(),
            "  Tonight at 22:00 UTC.  ".to_string(),
            DispatchTarget::All,
        )
        .unwrap();

        assert_eq!(command.title(), "Maintenance window");
        assert_eq!(command.body(), "Tonight at 22:00 UTC.");
    }
}

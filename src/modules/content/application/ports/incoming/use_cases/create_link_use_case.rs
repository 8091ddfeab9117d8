use async_trait::async_trait;
use uuid::Uuid;

use crate::content::application::domain::entities::LinkItem;

//
// ──────────────────────────────────────────────────────────
// Create Link Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateLinkCommand {
    owner: Uuid,
    label: String,
    url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LinkCommandError {
    #[error("Label cannot be empty")]
    EmptyLabel,

    #[error("Label too long")]
    LabelTooLong,

    #[error("URL must start with http:// or https://")]
    InvalidUrl,

    #[error("URL too long")]
    UrlTooLong,
}

pub(crate) fn validate_label(label: &str) -> Result<String, LinkCommandError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(LinkCommandError::EmptyLabel);
    }
    if label.len() > 100 {
        return Err(LinkCommandError::LabelTooLong);
    }
    Ok(label.to_string())
}

pub(crate) fn validate_url(url: &str) -> Result<String, LinkCommandError> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(LinkCommandError::InvalidUrl);
    }
    if url.len() > 2048 {
        return Err(LinkCommandError::UrlTooLong);
    }
    Ok(url.to_string())
}

impl CreateLinkCommand {
    pub fn new(owner: Uuid, label: String, url: String) -> Result<Self, LinkCommandError> {
        Ok(Self {
            owner,
            label: validate_label(&label)?,
            url: validate_url(&url)?,
        })
    }

    pub fn owner(&self) -> Uuid {
        self.owner
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateLinkError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateLinkUseCase: Send + Sync {
    async fn execute(&self, command: CreateLinkCommand) -> Result<LinkItem, CreateLinkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_trims_and_accepts_valid_input() {
        let cmd = CreateLinkCommand::new(
            Uuid::new_v4(),
            "  My blog  ".to_string(),
            "https://blog.example.com".to_string(),
        )
        .unwrap();

        assert_eq!(cmd.label(), "My blog");
        assert_eq!(cmd.url(), "https://blog.example.com");
    }

    #[test]
    fn command_rejects_empty_label() {
        let result = CreateLinkCommand::new(
            Uuid::new_v4(),
            "   ".to_string(),
            "https://example.com".to_string(),
        );
        assert!(matches!(result, Err(LinkCommandError::EmptyLabel)));
    }

    #[test]
    fn command_rejects_non_http_url() {
        let result = CreateLinkCommand::new(
            Uuid::new_v4(),
            "FTP".to_string(),
            "ftp://example.com".to_string(),
        );
        assert!(matches!(result, Err(LinkCommandError::InvalidUrl)));
    }
}

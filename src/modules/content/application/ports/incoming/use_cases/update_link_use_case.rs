use async_trait::async_trait;
use uuid::Uuid;

use super::create_link_use_case::{validate_label, validate_url, LinkCommandError};
use crate::content::application::domain::entities::LinkItem;

//
// ──────────────────────────────────────────────────────────
// Update Link Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateLinkCommand {
    owner: Uuid,
    link_id: Uuid,
    label: Option<String>,
    url: Option<String>,
}

impl UpdateLinkCommand {
    pub fn new(
        owner: Uuid,
        link_id: Uuid,
        label: Option<String>,
        url: Option<String>,
    ) -> Result<Self, LinkCommandError> {
        Ok(Self {
            owner,
            link_id,
            label: label.as_deref().map(validate_label).transpose()?,
            url: url.as_deref().map(validate_url).transpose()?,
        })
    }

    pub fn owner(&self) -> Uuid {
        self.owner
    }

    pub fn link_id(&self) -> Uuid {
        self.link_id
    }

    pub fn label(&self) -> Option<&String> {
        self.label.as_ref()
    }

    pub fn url(&self) -> Option<&String> {
        self.url.as_ref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateLinkError {
    #[error("Link not found")]
    LinkNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateLinkUseCase: Send + Sync {
    async fn execute(&self, command: UpdateLinkCommand) -> Result<LinkItem, UpdateLinkError>;
}

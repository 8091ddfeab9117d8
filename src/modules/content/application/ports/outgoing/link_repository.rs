use async_trait::async_trait;
use uuid::Uuid;

use crate::content::application::domain::entities::LinkItem;

#[derive(Debug, Clone, Default)]
pub struct PatchLinkData {
    pub label: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LinkRepositoryError {
    #[error("Link not found")]
    LinkNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Storage port for one ordered link collection. Implemented twice,
/// once over the bio links table and once over the social links table.
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns the owner's links ordered by position.
    async fn list_links(&self, owner: Uuid) -> Result<Vec<LinkItem>, LinkRepositoryError>;

    /// Inserts at the end of the collection, `max(position) + 1`.
    async fn create_link(
        &self,
        owner: Uuid,
        label: String,
        url: String,
    ) -> Result<LinkItem, LinkRepositoryError>;

    async fn update_link(
        &self,
        owner: Uuid,
        link_id: Uuid,
        data: PatchLinkData,
    ) -> Result<LinkItem, LinkRepositoryError>;

    /// Deletes one link. Sibling positions are left as they are.
    async fn delete_link(&self, owner: Uuid, link_id: Uuid) -> Result<(), LinkRepositoryError>;

    /// Rewrites positions to 0..n following the given order. Callers
    /// must have validated that the ids cover the owner's collection.
    async fn set_order(&self, owner: Uuid, ordered_ids: &[Uuid])
        -> Result<(), LinkRepositoryError>;
}

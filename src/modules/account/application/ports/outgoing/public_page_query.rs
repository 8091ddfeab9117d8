use async_trait::async_trait;

use crate::account::application::domain::entities::PublicPage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PublicPageQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read model behind `GET /api/pages/{username}`. Only published pages
/// are visible through this port.
#[async_trait]
pub trait PublicPageQuery: Send + Sync {
    async fn find_published_page(
        &self,
        username: &str,
    ) -> Result<Option<PublicPage>, PublicPageQueryError>;
}

use crate::account::application::domain::entities::PublicPage;
use crate::account::application::ports::outgoing::{PublicPageQuery, PublicPageQueryError};

#[derive(Debug, Clone)]
pub enum GetPublicPageError {
    /// Unknown username and unpublished page are indistinguishable.
    PageNotFound,
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IGetPublicPageUseCase: Send + Sync {
    async fn execute(&self, username: &str) -> Result<PublicPage, GetPublicPageError>;
}

#[derive(Debug, Clone)]
pub struct GetPublicPageUseCase<Q: PublicPageQuery> {
    query: Q,
}

impl<Q: PublicPageQuery> GetPublicPageUseCase<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait::async_trait]
impl<Q> IGetPublicPageUseCase for GetPublicPageUseCase<Q>
where
    Q: PublicPageQuery + Send + Sync,
{
    async fn execute(&self, username: &str) -> Result<PublicPage, GetPublicPageError> {
        let page = self
            .query
            .find_published_page(&username.to_lowercase())
            .await
            .map_err(|PublicPageQueryError::DatabaseError(msg)| {
                GetPublicPageError::RepositoryError(msg)
            })?;

        page.ok_or(GetPublicPageError::PageNotFound)
    }
}

use crate::admin::application::ports::outgoing::{
    PageRequest, PageResult, UserAdminRepository,
};
use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone)]
pub enum ListUsersError {
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IListUsersUseCase: Send + Sync {
    async fn execute(
        &self,
        q: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<User>, ListUsersError>;
}

pub struct ListUsersUseCase<R: UserAdminRepository> {
    users: R,
}

impl<R: UserAdminRepository> ListUsersUseCase<R> {
    pub fn new(users: R) -> Self {
        Self { users }
    }
}

#[async_trait::async_trait]
impl<R> IListUsersUseCase for ListUsersUseCase<R>
where
    R: UserAdminRepository + Send + Sync,
{
    async fn execute(
        &self,
        q: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<User>, ListUsersError> {
        let q = q
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty());

        self.users
            .list_users(q, &page)
            .await
            .map_err(|e| ListUsersError::RepositoryError(e.to_string()))
    }
}

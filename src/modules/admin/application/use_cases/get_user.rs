use uuid::Uuid;

use crate::admin::application::ports::outgoing::{UserAdminRepository, UserAdminRepositoryError};
use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone)]
pub enum GetUserError {
    UserNotFound,
    RepositoryError(String),
}

impl From<UserAdminRepositoryError> for GetUserError {
    fn from(err: UserAdminRepositoryError) -> Self {
        match err {
            UserAdminRepositoryError::UserNotFound => GetUserError::UserNotFound,
            UserAdminRepositoryError::DatabaseError(e) => GetUserError::RepositoryError(e),
        }
    }
}

#[async_trait::async_trait]
pub trait IGetUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<User, GetUserError>;
}

pub struct GetUserUseCase<R: UserAdminRepository> {
    users: R,
}

impl<R: UserAdminRepository> GetUserUseCase<R> {
    pub fn new(users: R) -> Self {
        Self { users }
    }
}

#[async_trait::async_trait]
impl<R> IGetUserUseCase for GetUserUseCase<R>
where
    R: UserAdminRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<User, GetUserError> {
        Ok(self.users.get_user(user_id).await?)
    }
}

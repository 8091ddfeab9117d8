use uuid::Uuid;

use crate::admin::application::ports::outgoing::{UserAdminRepository, UserAdminRepositoryError};

#[derive(Debug, Clone)]
pub enum DeleteUserError {
    UserNotFound,
    RepositoryError(String),
}

impl From<UserAdminRepositoryError> for DeleteUserError {
    fn from(err: UserAdminRepositoryError) -> Self {
        match err {
            UserAdminRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
            UserAdminRepositoryError::DatabaseError(e) => DeleteUserError::RepositoryError(e),
        }
    }
}

#[async_trait::async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    /// Removes the account and everything hanging off it via FK cascade.
    async fn execute(&self, user_id: Uuid) -> Result<(), DeleteUserError>;
}

pub struct DeleteUserUseCase<R: UserAdminRepository> {
    users: R,
}

impl<R: UserAdminRepository> DeleteUserUseCase<R> {
    pub fn new(users: R) -> Self {
        Self { users }
    }
}

#[async_trait::async_trait]
impl<R> IDeleteUserUseCase for DeleteUserUseCase<R>
where
    R: UserAdminRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<(), DeleteUserError> {
        Ok(self.users.delete_user(user_id).await?)
    }
}

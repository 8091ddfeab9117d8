use uuid::Uuid;

use crate::admin::application::ports::outgoing::{
    UserAdminPatch, UserAdminRepository, UserAdminRepositoryError,
};
use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone)]
pub enum UpdateUserError {
    UserNotFound,
    EmptyDisplayName,
    RepositoryError(String),
}

impl From<UserAdminRepositoryError> for UpdateUserError {
    fn from(err: UserAdminRepositoryError) -> Self {
        match err {
            UserAdminRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
            UserAdminRepositoryError::DatabaseError(e) => UpdateUserError::RepositoryError(e),
        }
    }
}

#[async_trait::async_trait]
pub trait IUpdateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        patch: UserAdminPatch,
    ) -> Result<User, UpdateUserError>;
}

pub struct UpdateUserUseCase<R: UserAdminRepository> {
    users: R,
}

impl<R: UserAdminRepository> UpdateUserUseCase<R> {
    pub fn new(users: R) -> Self {
        Self { users }
    }
}

#[async_trait::async_trait]
impl<R> IUpdateUserUseCase for UpdateUserUseCase<R>
where
    R: UserAdminRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        mut patch: UserAdminPatch,
    ) -> Result<User, UpdateUserError> {
        if let Some(name) = &patch.display_name {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(UpdateUserError::EmptyDisplayName);
            }
            patch.display_name = Some(trimmed.to_string());
        }

        Ok(self.users.update_user(user_id, patch).await?)
    }
}

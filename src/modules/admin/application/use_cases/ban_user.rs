use uuid::Uuid;

use crate::admin::application::ports::outgoing::{UserAdminRepository, UserAdminRepositoryError};
use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone)]
pub enum BanUserError {
    UserNotFound,
    EmptyReason,
    RepositoryError(String),
}

impl From<UserAdminRepositoryError> for BanUserError {
    fn from(err: UserAdminRepositoryError) -> Self {
        match err {
            UserAdminRepositoryError::UserNotFound => BanUserError::UserNotFound,
            UserAdminRepositoryError::DatabaseError(e) => BanUserError::RepositoryError(e),
        }
    }
}

#[async_trait::async_trait]
pub trait IBanUserUseCase: Send + Sync {
    /// The reason is mandatory; it is surfaced to the user on login.
    async fn execute(&self, user_id: Uuid, reason: String) -> Result<User, BanUserError>;
}

#[async_trait::async_trait]
pub trait IUnbanUserUseCase: Send + Sync {
    /// Clears both the flag and the stored reason.
    async fn execute(&self, user_id: Uuid) -> Result<User, BanUserError>;
}

pub struct BanUserUseCase<R: UserAdminRepository> {
    users: R,
}

impl<R: UserAdminRepository> BanUserUseCase<R> {
    pub fn new(users: R) -> Self {
        Self { users }
    }
}

#[async_trait::async_trait]
impl<R> IBanUserUseCase for BanUserUseCase<R>
where
    R: UserAdminRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, reason: String) -> Result<User, BanUserError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(BanUserError::EmptyReason);
        }

        Ok(self
            .users
            .set_ban(user_id, true, Some(reason.to_string()))
            .await?)
    }
}

pub struct UnbanUserUseCase<R: UserAdminRepository> {
    users: R,
}

impl<R: UserAdminRepository> UnbanUserUseCase<R> {
    pub fn new(users: R) -> Self {
        Self { users }
    }
}

#[async_trait::async_trait]
impl<R> IUnbanUserUseCase for UnbanUserUseCase<R>
where
    R: UserAdminRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<User, BanUserError> {
        Ok(self.users.set_ban(user_id, false, None).await?)
    }
}

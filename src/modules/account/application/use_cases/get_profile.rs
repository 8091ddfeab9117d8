use uuid::Uuid;

use crate::account::application::domain::entities::Profile;
use crate::account::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

#[derive(Debug, Clone)]
pub enum GetProfileError {
    UserNotFound,
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IGetProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Profile, GetProfileError>;
}

#[derive(Debug, Clone)]
pub struct GetProfileUseCase<R: ProfileRepository> {
    repository: R,
}

impl<R: ProfileRepository> GetProfileUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> IGetProfileUseCase for GetProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<Profile, GetProfileError> {
        let profile = self
            .repository
            .fetch_profile(user_id)
            .await
            .map_err(|err| match err {
                ProfileRepositoryError::DatabaseError(msg) => GetProfileError::RepositoryError(msg),
                _ => GetProfileError::RepositoryError("Unknown repository error".to_string()),
            })?;

        profile.ok_or(GetProfileError::UserNotFound)
    }
}

use uuid::Uuid;

use crate::account::application::domain::username::{normalize_username, UsernameFormatError};
use crate::account::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

#[derive(Debug, Clone)]
pub enum ClaimUsernameError {
    /// The caller already replaced the generated username once.
    AlreadyClaimed,
    InvalidFormat(UsernameFormatError),
    AlreadyTaken,
    UserNotFound,
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IClaimUsernameUseCase: Send + Sync {
    /// Replaces the auto-generated username with a caller-chosen one.
    /// Allowed exactly once per account; returns the stored canonical
    /// form on success.
    async fn execute(&self, user_id: Uuid, requested: &str) -> Result<String, ClaimUsernameError>;
}

#[derive(Debug, Clone)]
pub struct ClaimUsernameUseCase<R: ProfileRepository> {
    repository: R,
}

impl<R: ProfileRepository> ClaimUsernameUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> IClaimUsernameUseCase for ClaimUsernameUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, requested: &str) -> Result<String, ClaimUsernameError> {
        let profile = self
            .repository
            .fetch_profile(user_id)
            .await
            .map_err(map_repo_error)?
            .ok_or(ClaimUsernameError::UserNotFound)?;

        // The claim gate comes before format validation so the response
        // never depends on the submitted input once the claim is spent.
        if profile.has_custom_username {
            return Err(ClaimUsernameError::AlreadyClaimed);
        }

        let username =
            normalize_username(requested).map_err(ClaimUsernameError::InvalidFormat)?;

        // Re-submitting the current name in a different case is a no-op
        // claim, not a conflict with self.
        self.repository
            .set_username(user_id, &username)
            .await
            .map_err(|err| match err {
                ProfileRepositoryError::UsernameTaken => ClaimUsernameError::AlreadyTaken,
                other => map_repo_error(other),
            })?;

        Ok(username)
    }
}

fn map_repo_error(err: ProfileRepositoryError) -> ClaimUsernameError {
    match err {
        ProfileRepositoryError::UserNotFound => ClaimUsernameError::UserNotFound,
        ProfileRepositoryError::DatabaseError(msg) => ClaimUsernameError::RepositoryError(msg),
        ProfileRepositoryError::UsernameTaken => ClaimUsernameError::AlreadyTaken,
    }
}

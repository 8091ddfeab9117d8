use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::domain::entities::Profile;

/// Partial update applied to the profile; `None` leaves the field as is.
#[derive(Debug, Clone, Default)]
pub struct PatchProfileData {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub image_path: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<Profile>, ProfileRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: PatchProfileData,
    ) -> Result<Profile, ProfileRepositoryError>;

    /// Stores the canonical username and marks it as claimed.
    /// Fails with `UsernameTaken` when another row already holds the
    /// name case-insensitively.
    async fn set_username(&self, user_id: Uuid, username: &str)
        -> Result<(), ProfileRepositoryError>;

    async fn set_published(&self, user_id: Uuid) -> Result<(), ProfileRepositoryError>;
}

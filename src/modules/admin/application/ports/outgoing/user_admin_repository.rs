use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{PlanType, User};

use super::paging::{PageRequest, PageResult};

/// Partial update applied by an operator. `None` fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct UserAdminPatch {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub is_premium: Option<bool>,
    pub plan_type: Option<Option<PlanType>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserAdminRepositoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserAdminRepository: Send + Sync {
    /// `q` matches username, email or display name as a substring.
    async fn list_users(
        &self,
        q: Option<&str>,
        page: &PageRequest,
    ) -> Result<PageResult<User>, UserAdminRepositoryError>;

    async fn get_user(&self, user_id: Uuid) -> Result<User, UserAdminRepositoryError>;

    async fn update_user(
        &self,
        user_id: Uuid,
        patch: UserAdminPatch,
    ) -> Result<User, UserAdminRepositoryError>;

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserAdminRepositoryError>;

    /// Banning stores the reason; unbanning clears it.
    async fn set_ban(
        &self,
        user_id: Uuid,
        banned: bool,
        reason: Option<String>,
    ) -> Result<User, UserAdminRepositoryError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::admin::application::domain::entities::AdminRecord;
use crate::admin::application::domain::permissions::{AdminRole, Permission};

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub user_id: Uuid,
    pub role: AdminRole,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminRepositoryError {
    #[error("Admin not found")]
    AdminNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("User is already an admin")]
    DuplicateAdmin,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Newest first.
    async fn list_admins(&self) -> Result<Vec<AdminRecord>, AdminRepositoryError>;

    /// Also flips `is_admin` on the user row.
    async fn create_admin(&self, data: NewAdmin) -> Result<AdminRecord, AdminRepositoryError>;

    async fn get_admin(&self, admin_id: Uuid) -> Result<AdminRecord, AdminRepositoryError>;

    /// Removes the record and clears `is_admin` on the user row.
    async fn delete_admin(&self, admin_id: Uuid) -> Result<(), AdminRepositoryError>;
}

use uuid::Uuid;

use crate::admin::application::ports::outgoing::{AdminRepository, AdminRepositoryError};

#[derive(Debug, Clone)]
pub enum DeleteAdminError {
    AdminNotFound,
    RepositoryError(String),
}

impl From<AdminRepositoryError> for DeleteAdminError {
    fn from(err: AdminRepositoryError) -> Self {
        match err {
            AdminRepositoryError::AdminNotFound => DeleteAdminError::AdminNotFound,
            other => DeleteAdminError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait::async_trait]
pub trait IDeleteAdminUseCase: Send + Sync {
    /// Revokes dashboard access; the underlying user account survives.
    async fn execute(&self, admin_id: Uuid) -> Result<(), DeleteAdminError>;
}

pub struct DeleteAdminUseCase<R: AdminRepository> {
    admins: R,
}

impl<R: AdminRepository> DeleteAdminUseCase<R> {
    pub fn new(admins: R) -> Self {
        Self { admins }
    }
}

#[async_trait::async_trait]
impl<R> IDeleteAdminUseCase for DeleteAdminUseCase<R>
where
    R: AdminRepository + Send + Sync,
{
    async fn execute(&self, admin_id: Uuid) -> Result<(), DeleteAdminError> {
        Ok(self.admins.delete_admin(admin_id).await?)
    }
}

use uuid::Uuid;

use crate::admin::application::domain::entities::AdminRecord;
use crate::admin::application::ports::outgoing::{AdminRepository, AdminRepositoryError};

#[derive(Debug, Clone)]
pub enum GetAdminError {
    AdminNotFound,
    RepositoryError(String),
}

impl From<AdminRepositoryError> for GetAdminError {
    fn from(err: AdminRepositoryError) -> Self {
        match err {
            AdminRepositoryError::AdminNotFound => GetAdminError::AdminNotFound,
            other => GetAdminError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait::async_trait]
pub trait IGetAdminUseCase: Send + Sync {
    async fn execute(&self, admin_id: Uuid) -> Result<AdminRecord, GetAdminError>;
}

pub struct GetAdminUseCase<R: AdminRepository> {
    admins: R,
}

impl<R: AdminRepository> GetAdminUseCase<R> {
    pub fn new(admins: R) -> Self {
        Self { admins }
    }
}

#[async_trait::async_trait]
impl<R> IGetAdminUseCase for GetAdminUseCase<R>
where
    R: AdminRepository + Send + Sync,
{
    async fn execute(&self, admin_id: Uuid) -> Result<AdminRecord, GetAdminError> {
        Ok(self.admins.get_admin(admin_id).await?)
    }
}

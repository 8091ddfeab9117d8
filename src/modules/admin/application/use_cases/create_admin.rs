use uuid::Uuid;

use crate::admin::application::domain::entities::AdminRecord;
use crate::admin::application::domain::permissions::{AdminRole, Permission};
use crate::admin::application::ports::outgoing::{
    AdminRepository, AdminRepositoryError, NewAdmin,
};

#[derive(Debug, Clone)]
pub enum CreateAdminError {
    UserNotFound,
    DuplicateAdmin,
    RepositoryError(String),
}

impl From<AdminRepositoryError> for CreateAdminError {
    fn from(err: AdminRepositoryError) -> Self {
        match err {
            AdminRepositoryError::UserNotFound => CreateAdminError::UserNotFound,
            AdminRepositoryError::DuplicateAdmin => CreateAdminError::DuplicateAdmin,
            AdminRepositoryError::AdminNotFound | AdminRepositoryError::DatabaseError(_) => {
                CreateAdminError::RepositoryError(err.to_string())
            }
        }
    }
}

#[async_trait::async_trait]
pub trait ICreateAdminUseCase: Send + Sync {
    /// Grants dashboard access. Without explicit overrides the role's
    /// default permission set is stored.
    async fn execute(
        &self,
        user_id: Uuid,
        role: AdminRole,
        overrides: Option<Vec<Permission>>,
    ) -> Result<AdminRecord, CreateAdminError>;
}

pub struct CreateAdminUseCase<R: AdminRepository> {
    admins: R,
}

impl<R: AdminRepository> CreateAdminUseCase<R> {
    pub fn new(admins: R) -> Self {
        Self { admins }
    }
}

#[async_trait::async_trait]
impl<R> ICreateAdminUseCase for CreateAdminUseCase<R>
where
    R: AdminRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        role: AdminRole,
        overrides: Option<Vec<Permission>>,
    ) -> Result<AdminRecord, CreateAdminError> {
        let permissions = overrides.unwrap_or_else(|| role.default_permissions());

        Ok(self
            .admins
            .create_admin(NewAdmin {
                user_id,
                role,
                permissions,
            })
            .await?)
    }
}

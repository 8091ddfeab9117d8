use crate::admin::application::domain::entities::AdminRecord;
use crate::admin::application::ports::outgoing::AdminRepository;

#[derive(Debug, Clone)]
pub enum ListAdminsError {
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IListAdminsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<AdminRecord>, ListAdminsError>;
}

pub struct ListAdminsUseCase<R: AdminRepository> {
    admins: R,
}

impl<R: AdminRepository> ListAdminsUseCase<R> {
    pub fn new(admins: R) -> Self {
        Self { admins }
    }
}

#[async_trait::async_trait]
impl<R> IListAdminsUseCase for ListAdminsUseCase<R>
where
    R: AdminRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<AdminRecord>, ListAdminsError> {
        self.admins
            .list_admins()
            .await
            .map_err(|e| ListAdminsError::RepositoryError(e.to_string()))
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::billing::application::domain::entities::{Transaction, TransactionStatus};

use super::paging::{PageRequest, PageResult};

#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub status: Option<TransactionStatus>,
    pub gateway: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TransactionAdminRepositoryError {
    #[error("Transaction not found")]
    TransactionNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TransactionAdminRepository: Send + Sync {
    /// Newest first, filtered then paginated.
    async fn list_transactions(
        &self,
        filter: &TransactionFilter,
        page: &PageRequest,
    ) -> Result<PageResult<Transaction>, TransactionAdminRepositoryError>;

    async fn get_transaction(
        &self,
        transaction_id: Uuid,
    ) -> Result<Transaction, TransactionAdminRepositoryError>;

    async fn delete_transaction(
        &self,
        transaction_id: Uuid,
    ) -> Result<(), TransactionAdminRepositoryError>;
}

use uuid::Uuid;

use crate::admin::application::ports::outgoing::{
    TransactionAdminRepository, TransactionAdminRepositoryError,
};
use crate::billing::application::domain::entities::Transaction;

#[derive(Debug, Clone)]
pub enum GetTransactionError {
    TransactionNotFound,
    RepositoryError(String),
}

impl From<TransactionAdminRepositoryError> for GetTransactionError {
    fn from(err: TransactionAdminRepositoryError) -> Self {
        match err {
            TransactionAdminRepositoryError::TransactionNotFound => {
                GetTransactionError::TransactionNotFound
            }
            TransactionAdminRepositoryError::DatabaseError(e) => {
                GetTransactionError::RepositoryError(e)
            }
        }
    }
}

#[async_trait::async_trait]
pub trait IGetTransactionUseCase: Send + Sync {
    async fn execute(&self, transaction_id: Uuid) -> Result<Transaction, GetTransactionError>;
}

pub struct GetTransactionUseCase<R: TransactionAdminRepository> {
    transactions: R,
}

impl<R: TransactionAdminRepository> GetTransactionUseCase<R> {
    pub fn new(transactions: R) -> Self {
        Self { transactions }
    }
}

#[async_trait::async_trait]
impl<R> IGetTransactionUseCase for GetTransactionUseCase<R>
where
    R: TransactionAdminRepository + Send + Sync,
{
    async fn execute(&self, transaction_id: Uuid) -> Result<Transaction, GetTransactionError> {
        Ok(self.transactions.get_transaction(transaction_id).await?)
    }
}

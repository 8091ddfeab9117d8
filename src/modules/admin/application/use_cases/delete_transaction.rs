use uuid::Uuid;

use crate::admin::application::ports::outgoing::{
    TransactionAdminRepository, TransactionAdminRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteTransactionError {
    TransactionNotFound,
    RepositoryError(String),
}

impl From<TransactionAdminRepositoryError> for DeleteTransactionError {
    fn from(err: TransactionAdminRepositoryError) -> Self {
        match err {
            TransactionAdminRepositoryError::TransactionNotFound => {
                DeleteTransactionError::TransactionNotFound
            }
            TransactionAdminRepositoryError::DatabaseError(e) => {
                DeleteTransactionError::RepositoryError(e)
            }
        }
    }
}

#[async_trait::async_trait]
pub trait IDeleteTransactionUseCase: Send + Sync {
    async fn execute(&self, transaction_id: Uuid) -> Result<(), DeleteTransactionError>;
}

pub struct DeleteTransactionUseCase<R: TransactionAdminRepository> {
    transactions: R,
}

impl<R: TransactionAdminRepository> DeleteTransactionUseCase<R> {
    pub fn new(transactions: R) -> Self {
        Self { transactions }
    }
}

#[async_trait::async_trait]
impl<R> IDeleteTransactionUseCase for DeleteTransactionUseCase<R>
where
    R: TransactionAdminRepository + Send + Sync,
{
    async fn execute(&self, transaction_id: Uuid) -> Result<(), DeleteTransactionError> {
        Ok(self.transactions.delete_transaction(transaction_id).await?)
    }
}

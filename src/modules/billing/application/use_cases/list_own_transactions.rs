use uuid::Uuid;

use crate::billing::application::domain::entities::Transaction;
use crate::billing::application::ports::outgoing::TransactionStore;

#[derive(Debug, Clone)]
pub enum ListOwnTransactionsError {
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IListOwnTransactionsUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Vec<Transaction>, ListOwnTransactionsError>;
}

pub struct ListOwnTransactionsUseCase<T: TransactionStore> {
    transactions: T,
}

impl<T: TransactionStore> ListOwnTransactionsUseCase<T> {
    pub fn new(transactions: T) -> Self {
        Self { transactions }
    }
}

#[async_trait::async_trait]
impl<T> IListOwnTransactionsUseCase for ListOwnTransactionsUseCase<T>
where
    T: TransactionStore + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<Vec<Transaction>, ListOwnTransactionsError> {
        self.transactions
            .list_for_user(user_id)
            .await
            .map_err(|e| ListOwnTransactionsError::RepositoryError(e.to_string()))
    }
}

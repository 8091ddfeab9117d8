use crate::admin::application::ports::outgoing::{
    PageRequest, PageResult, TransactionAdminRepository, TransactionFilter,
};
use crate::billing::application::domain::entities::Transaction;

#[derive(Debug, Clone)]
pub enum ListTransactionsError {
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IListTransactionsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: TransactionFilter,
        page: PageRequest,
    ) -> Result<PageResult<Transaction>, ListTransactionsError>;
}

pub struct ListTransactionsUseCase<R: TransactionAdminRepository> {
    transactions: R,
}

impl<R: TransactionAdminRepository> ListTransactionsUseCase<R> {
    pub fn new(transactions: R) -> Self {
        Self { transactions }
    }
}

#[async_trait::async_trait]
impl<R> IListTransactionsUseCase for ListTransactionsUseCase<R>
where
    R: TransactionAdminRepository + Send + Sync,
{
    async fn execute(
        &self,
        filter: TransactionFilter,
        page: PageRequest,
    ) -> Result<PageResult<Transaction>, ListTransactionsError> {
        self.transactions
            .list_transactions(&filter, &page)
            .await
            .map_err(|e| ListTransactionsError::RepositoryError(e.to_string()))
    }
}

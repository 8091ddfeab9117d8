use uuid::Uuid;

use crate::billing::application::domain::entities::Transaction;
use crate::billing::application::ports::outgoing::TransactionStore;

#[derive(Debug, Clone)]
pub enum GetInvoiceError {
    TransactionNotFound,
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IGetInvoiceUseCase: Send + Sync {
    /// Returns the user's own transaction for invoice rendering.
    /// Another user's transaction id reads as missing.
    async fn execute(
        &self,
        user_id: Uuid,
        transaction_id: Uuid,
    ) -> Result<Transaction, GetInvoiceError>;
}

pub struct GetInvoiceUseCase<T: TransactionStore> {
    transactions: T,
}

impl<T: TransactionStore> GetInvoiceUseCase<T> {
    pub fn new(transactions: T) -> Self {
        Self { transactions }
    }
}

#[async_trait::async_trait]
impl<T> IGetInvoiceUseCase for GetInvoiceUseCase<T>
where
    T: TransactionStore + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        transaction_id: Uuid,
    ) -> Result<Transaction, GetInvoiceError> {
        let transaction = self
            .transactions
            .find_by_id(transaction_id)
            .await
            .map_err(|e| GetInvoiceError::RepositoryError(e.to_string()))?
            .ok_or(GetInvoiceError::TransactionNotFound)?;

        if transaction.user_id != user_id {
            return Err(GetInvoiceError::TransactionNotFound);
        }

        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::application::domain::entities::TransactionStatus;
    use crate::billing::application::ports::outgoing::{NewTransaction, TransactionStoreError};
    use async_trait::async_trait;
    use chrono::Utc;

    struct MockTransactionStore {
        transaction: Option<Transaction>,
    }

    #[async_trait]
    impl TransactionStore for MockTransactionStore {
        async fn record_transaction(
            &self,
            _data: NewTransaction,
        ) -> Result<Transaction, TransactionStoreError> {
            unimplemented!()
        }

        async fn find_by_id(
            &self,
            transaction_id: Uuid,
        ) -> Result<Option<Transaction>, TransactionStoreError> {
            Ok(self
                .transaction
                .clone()
                .filter(|t| t.id == transaction_id))
        }

        async fn list_for_user(
            &self,
            _user_id: Uuid,
        ) -> Result<Vec<Transaction>, TransactionStoreError> {
            unimplemented!()
        }
    }

    fn transaction(user_id: Uuid) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            user_id,
            gateway_id: "cs_123".to_string(),
            gateway: "stripe".to_string(),
            amount_cents: 499,
            currency: "usd".to_string(),
            status: TransactionStatus::Succeeded,
            description: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn owner_can_fetch_their_transaction() {
        let user_id = Uuid::new_v4();
        let tx = transaction(user_id);
        let store = MockTransactionStore {
            transaction: Some(tx.clone()),
        };

        let use_case = GetInvoiceUseCase::new(store);
        let found = use_case.execute(user_id, tx.id).await.unwrap();

        assert_eq!(found, tx);
    }

    #[tokio::test]
    async fn foreign_transaction_reads_as_missing() {
        let tx = transaction(Uuid::new_v4());
        let store = MockTransactionStore {
            transaction: Some(tx.clone()),
        };

        let use_case = GetInvoiceUseCase::new(store);
        let result = use_case.execute(Uuid::new_v4(), tx.id).await;

        assert!(matches!(result, Err(GetInvoiceError::TransactionNotFound)));
    }
}

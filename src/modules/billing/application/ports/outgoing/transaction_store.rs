use async_trait::async_trait;
use uuid::Uuid;

use crate::billing::application::domain::entities::{Transaction, TransactionStatus};

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub user_id: Uuid,
    pub gateway_id: String,
    pub gateway: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: TransactionStatus,
    pub description: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TransactionStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Append-only payment history owned by the billing module.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Inserts the transaction, or returns the existing row when the
    /// gateway id was already recorded. Verification can be retried
    /// without duplicating history.
    async fn record_transaction(
        &self,
        data: NewTransaction,
    ) -> Result<Transaction, TransactionStoreError>;

    async fn find_by_id(
        &self,
        transaction_id: Uuid,
    ) -> Result<Option<Transaction>, TransactionStoreError>;

    /// The user's own history, newest first.
    async fn list_for_user(&self, user_id: Uuid)
        -> Result<Vec<Transaction>, TransactionStoreError>;
}

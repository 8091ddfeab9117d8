use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::admin::application::ports::outgoing::{
    PageRequest, PageResult, TransactionAdminRepository, TransactionAdminRepositoryError,
    TransactionFilter,
};
use crate::billing::adapter::outgoing::sea_orm_entity::transactions;
use crate::billing::application::domain::entities::Transaction;

#[derive(Clone, Debug)]
pub struct TransactionAdminPostgres {
    db: Arc<DatabaseConnection>,
}

impl TransactionAdminPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionAdminRepository for TransactionAdminPostgres {
    async fn list_transactions(
        &self,
        filter: &TransactionFilter,
        page: &PageRequest,
    ) -> Result<PageResult<Transaction>, TransactionAdminRepositoryError> {
        let mut query =
            transactions::Entity::find().order_by_desc(transactions::Column::CreatedAt);

        if let Some(status) = filter.status {
            query = query.filter(transactions::Column::Status.eq(status.as_str()));
        }
        if let Some(gateway) = &filter.gateway {
            query = query.filter(transactions::Column::Gateway.eq(gateway.as_str()));
        }
        if let Some(from) = filter.from {
            query = query.filter(transactions::Column::CreatedAt.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(transactions::Column::CreatedAt.lte(to));
        }

        let total = query
            .clone()
            .count(&*self.db)
            .await
            .map_err(|e| TransactionAdminRepositoryError::DatabaseError(e.to_string()))?;

        let offset = (page.page.saturating_sub(1) * page.per_page) as u64;
        let models = query
            .offset(offset)
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(|e| TransactionAdminRepositoryError::DatabaseError(e.to_string()))?;

        Ok(PageResult {
            items: models.into_iter().map(|m| m.into_domain()).collect(),
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn get_transaction(
        &self,
        transaction_id: Uuid,
    ) -> Result<Transaction, TransactionAdminRepositoryError> {
        let model = transactions::Entity::find_by_id(transaction_id)
            .one(&*self.db)
            .await
            .map_err(|e| TransactionAdminRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(TransactionAdminRepositoryError::TransactionNotFound)?;

        Ok(model.into_domain())
    }

    async fn delete_transaction(
        &self,
        transaction_id: Uuid,
    ) -> Result<(), TransactionAdminRepositoryError> {
        let result = transactions::Entity::delete_by_id(transaction_id)
            .exec(&*self.db)
            .await
            .map_err(|e| TransactionAdminRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(TransactionAdminRepositoryError::TransactionNotFound);
        }

        Ok(())
    }
}

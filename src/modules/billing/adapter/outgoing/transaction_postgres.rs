use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, RuntimeErr, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::billing::application::domain::entities::Transaction;
use crate::billing::application::ports::outgoing::{
    NewTransaction, TransactionStore, TransactionStoreError,
};

use super::sea_orm_entity::transactions::{
    ActiveModel as TransactionActiveModel, Column as TransactionColumn,
    Entity as TransactionEntity,
};

#[derive(Clone, Debug)]
pub struct TransactionPostgres {
    db: Arc<DatabaseConnection>,
}

impl TransactionPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_by_gateway_id(
        &self,
        gateway_id: &str,
    ) -> Result<Option<Transaction>, TransactionStoreError> {
        let model = TransactionEntity::find()
            .filter(TransactionColumn::GatewayId.eq(gateway_id))
            .one(&*self.db)
            .await
            .map_err(|e| TransactionStoreError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.into_domain()))
    }
}

fn is_gateway_id_conflict(err: &DbErr) -> bool {
    if let DbErr::Query(RuntimeErr::SqlxError(ref sqlx_err)) = err {
        return sqlx_err.to_string().contains("transactions_gateway_id_key");
    }
    false
}

#[async_trait]
impl TransactionStore for TransactionPostgres {
    async fn record_transaction(
        &self,
        data: NewTransaction,
    ) -> Result<Transaction, TransactionStoreError> {
        let active = TransactionActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id),
            gateway_id: Set(data.gateway_id.clone()),
            gateway: Set(data.gateway),
            amount_cents: Set(data.amount_cents),
            currency: Set(data.currency),
            status: Set(data.status.as_str().to_string()),
            description: Set(data.description),
            created_at: Set(Utc::now().into()),
        };

        match active.insert(&*self.db).await {
            Ok(inserted) => Ok(inserted.into_domain()),
            Err(err) if is_gateway_id_conflict(&err) => {
                // Lost the race against an earlier verification of the
                // same session. The existing row is the answer.
                self.find_by_gateway_id(&data.gateway_id)
                    .await?
                    .ok_or_else(|| TransactionStoreError::DatabaseError(err.to_string()))
            }
            Err(err) => Err(TransactionStoreError::DatabaseError(err.to_string())),
        }
    }

    async fn find_by_id(
        &self,
        transaction_id: Uuid,
    ) -> Result<Option<Transaction>, TransactionStoreError> {
        let model = TransactionEntity::find_by_id(transaction_id)
            .one(&*self.db)
            .await
            .map_err(|e| TransactionStoreError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.into_domain()))
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Transaction>, TransactionStoreError> {
        let models = TransactionEntity::find()
            .filter(TransactionColumn::UserId.eq(user_id))
            .order_by_desc(TransactionColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| TransactionStoreError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.into_domain()).collect())
    }
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, RuntimeErr, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::promo::application::domain::entities::PromoCode;
use crate::promo::application::ports::outgoing::{
    NewPromoCode, PromoRepository, PromoRepositoryError,
};

use super::sea_orm_entity::promo_codes::{
    ActiveModel as PromoActiveModel, Column as PromoColumn, Entity as PromoEntity,
};

#[derive(Clone, Debug)]
pub struct PromoPostgres {
    db: Arc<DatabaseConnection>,
}

impl PromoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_code_conflict(err: DbErr) -> PromoRepositoryError {
    if let DbErr::Query(RuntimeErr::SqlxError(ref sqlx_err)) = err {
        if sqlx_err.to_string().contains("promo_codes_code_key") {
            return PromoRepositoryError::DuplicateCode;
        }
    }
    PromoRepositoryError::DatabaseError(err.to_string())
}

#[async_trait]
impl PromoRepository for PromoPostgres {
    async fn list_promos(&self) -> Result<Vec<PromoCode>, PromoRepositoryError> {
        let models = PromoEntity::find()
            .order_by_desc(PromoColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| PromoRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.into_domain()).collect())
    }

    async fn create_promo(&self, data: NewPromoCode) -> Result<PromoCode, PromoRepositoryError> {
        let active = PromoActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(data.code),
            description: Set(data.description),
            duration_days: Set(data.duration_days),
            max_redemptions: Set(data.max_redemptions),
            current_redemptions: Set(0),
            assigned_user_id: Set(data.assigned_user_id),
            expires_at: Set(data.expires_at.map(Into::into)),
            is_active: Set(true),
            created_at: Set(Utc::now().into()),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_code_conflict)?;

        Ok(inserted.into_domain())
    }

    async fn delete_promo(&self, promo_id: Uuid) -> Result<(), PromoRepositoryError> {
        let result = PromoEntity::delete_by_id(promo_id)
            .exec(&*self.db)
            .await
            .map_err(|e| PromoRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(PromoRepositoryError::PromoNotFound);
        }

        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<PromoCode>, PromoRepositoryError> {
        let model = PromoEntity::find()
            .filter(PromoColumn::Code.eq(code))
            .one(&*self.db)
            .await
            .map_err(|e| PromoRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.into_domain()))
    }

    async fn redeem(&self, promo_id: Uuid) -> Result<bool, PromoRepositoryError> {
        // Single guarded UPDATE; the WHERE clause re-checks the cap so
        // the counter cannot pass it under concurrent redemptions.
        let result = PromoEntity::update_many()
            .col_expr(
                PromoColumn::CurrentRedemptions,
                Expr::col(PromoColumn::CurrentRedemptions).add(1),
            )
            .filter(PromoColumn::Id.eq(promo_id))
            .filter(
                Condition::any()
                    .add(PromoColumn::MaxRedemptions.is_null())
                    .add(
                        Expr::col(PromoColumn::CurrentRedemptions)
                            .lt(Expr::col(PromoColumn::MaxRedemptions)),
                    ),
            )
            .exec(&*self.db)
            .await
            .map_err(|e| PromoRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected == 1)
    }

    async fn release(&self, promo_id: Uuid) -> Result<(), PromoRepositoryError> {
        PromoEntity::update_many()
            .col_expr(
                PromoColumn::CurrentRedemptions,
                Expr::col(PromoColumn::CurrentRedemptions).sub(1),
            )
            .filter(PromoColumn::Id.eq(promo_id))
            .filter(Expr::col(PromoColumn::CurrentRedemptions).gt(0))
            .exec(&*self.db)
            .await
            .map_err(|e| PromoRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::promo::adapter::outgoing::sea_orm_entity::promo_codes::Model as PromoModel;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn promo_model(code: &str) -> PromoModel {
        PromoModel {
            id: Uuid::new_v4(),
            code: code.to_string(),
            description: None,
            duration_days: 30,
            max_redemptions: Some(3),
            current_redemptions: 0,
            assigned_user_id: None,
            expires_at: None,
            is_active: true,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn find_by_code_maps_the_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![promo_model("SUMMER2025")]])
            .into_connection();

        let repo = PromoPostgres::new(Arc::new(db));

        let promo = repo.find_by_code("SUMMER2025").await.unwrap().unwrap();
        assert_eq!(promo.code, "SUMMER2025");
        assert_eq!(promo.max_redemptions, Some(3));
    }

    #[tokio::test]
    async fn redeem_reports_whether_the_guard_won() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = PromoPostgres::new(Arc::new(db));

        assert!(repo.redeem(Uuid::new_v4()).await.unwrap());
        assert!(!repo.redeem(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn release_tolerates_an_already_zero_counter() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PromoPostgres::new(Arc::new(db));

        assert!(repo.release(Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn delete_missing_promo_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PromoPostgres::new(Arc::new(db));

        let result = repo.delete_promo(Uuid::new_v4()).await;
        assert!(matches!(result, Err(PromoRepositoryError::PromoNotFound)));
    }
}

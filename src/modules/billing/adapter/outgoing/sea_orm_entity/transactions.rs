use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::billing::application::domain::entities::{Transaction, TransactionStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub gateway_id: String,
    pub gateway: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    User,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Transaction {
        Transaction {
            id: self.id,
            user_id: self.user_id,
            gateway_id: self.gateway_id,
            gateway: self.gateway,
            amount_cents: self.amount_cents,
            currency: self.currency,
            status: TransactionStatus::parse(&self.status).unwrap_or(TransactionStatus::Pending),
            description: self.description,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

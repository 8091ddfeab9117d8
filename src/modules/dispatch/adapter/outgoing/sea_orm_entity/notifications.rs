use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::dispatch::application::domain::entities::{DispatchTarget, Notification};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub target: String,
    pub recipients: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Notification {
        Notification {
            id: self.id,
            title: self.title,
            body: self.body,
            // Rows are only written through the domain type; a row that
            // fails to parse falls back to the broadcast target.
            target: DispatchTarget::parse(&self.target).unwrap_or(DispatchTarget::All),
            recipients: self.recipients,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::admin::application::domain::entities::AdminRecord;
use crate::admin::application::domain::permissions::{AdminRole, Permission};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub role: String,
    pub permissions: Json,
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
    pub fn into_domain(self) -> AdminRecord {
        let permissions = serde_json::from_value::<Vec<String>>(self.permissions)
            .unwrap_or_default()
            .iter()
            .filter_map(|name| Permission::parse(name))
            .collect();

        AdminRecord {
            id: self.id,
            user_id: self.user_id,
            // An unknown stored role falls back to the least privileged one.
            role: AdminRole::parse(&self.role).unwrap_or(AdminRole::AnalyticsViewer),
            permissions,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

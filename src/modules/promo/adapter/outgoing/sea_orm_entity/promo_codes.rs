use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::promo::application::domain::entities::PromoCode;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "promo_codes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub description: Option<String>,
    pub duration_days: i32,
    pub max_redemptions: Option<i32>,
    pub current_redemptions: i32,
    pub assigned_user_id: Option<Uuid>,
    pub expires_at: Option<DateTimeWithTimeZone>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::AssignedUserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    AssignedUser,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> PromoCode {
        PromoCode {
            id: self.id,
            code: self.code,
            description: self.description,
            duration_days: self.duration_days,
            max_redemptions: self.max_redemptions,
            current_redemptions: self.current_redemptions,
            assigned_user_id: self.assigned_user_id,
            expires_at: self.expires_at.map(|t| t.with_timezone(&chrono::Utc)),
            is_active: self.is_active,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

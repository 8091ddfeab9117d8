use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::{PlanType, User};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    #[sea_orm(unique)]
    pub username: String,
    pub bio: Option<String>,
    pub image_path: Option<String>,
    pub background_path: Option<String>,
    pub has_custom_username: bool,
    pub is_published: bool,
    pub is_admin: bool,
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub is_premium: bool,
    pub plan_type: Option<String>,
    pub premium_expires_at: Option<DateTimeWithTimeZone>,
    pub subscription_id: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            // Only update updated_at on UPDATE, not INSERT
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl Model {
    pub fn into_domain(self) -> User {
        User {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            display_name: self.display_name,
            username: self.username,
            bio: self.bio,
            image_path: self.image_path,
            background_path: self.background_path,
            has_custom_username: self.has_custom_username,
            is_published: self.is_published,
            is_admin: self.is_admin,
            is_banned: self.is_banned,
            ban_reason: self.ban_reason,
            is_premium: self.is_premium,
            plan_type: self.plan_type.as_deref().and_then(PlanType::parse),
            premium_expires_at: self
                .premium_expires_at
                .map(|t| t.with_timezone(&chrono::Utc)),
            subscription_id: self.subscription_id,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

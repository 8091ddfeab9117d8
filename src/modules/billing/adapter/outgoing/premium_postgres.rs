use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity,
};
use crate::auth::application::domain::entities::PlanType;
use crate::billing::application::domain::entities::BillingProfile;
use crate::billing::application::ports::outgoing::{BillingRepositoryError, PremiumRepository};

/// Premium state lives on the user row; this adapter only touches the
/// billing columns.
#[derive(Clone, Debug)]
pub struct PremiumPostgres {
    db: Arc<DatabaseConnection>,
}

impl PremiumPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PremiumRepository for PremiumPostgres {
    async fn fetch_billing_profile(
        &self,
        user_id: Uuid,
    ) -> Result<BillingProfile, BillingRepositoryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| BillingRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(BillingRepositoryError::UserNotFound)?;

        Ok(BillingProfile {
            user_id: model.id,
            email: model.email,
            is_premium: model.is_premium,
            plan_type: model.plan_type.as_deref().and_then(PlanType::parse),
            premium_expires_at: model.premium_expires_at.map(|t| t.with_timezone(&Utc)),
            subscription_id: model.subscription_id,
        })
    }

    async fn activate_premium(
        &self,
        user_id: Uuid,
        plan: PlanType,
        expires_at: Option<DateTime<Utc>>,
        subscription_id: Option<String>,
    ) -> Result<(), BillingRepositoryError> {
        let active = UserActiveModel {
            id: Set(user_id),
            is_premium: Set(true),
            plan_type: Set(Some(plan.as_str().to_string())),
            premium_expires_at: Set(expires_at.map(Into::into)),
            subscription_id: Set(subscription_id),
            ..Default::default()
        };

        active
            .update(&*self.db)
            .await
            .map_err(|e| BillingRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

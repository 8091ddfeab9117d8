use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::admin::application::ports::outgoing::{
    PageRequest, PageResult, UserAdminPatch, UserAdminRepository, UserAdminRepositoryError,
};
use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use crate::auth::application::domain::entities::User;

#[derive(Clone, Debug)]
pub struct UserAdminPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserAdminPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserAdminRepository for UserAdminPostgres {
    async fn list_users(
        &self,
        q: Option<&str>,
        page: &PageRequest,
    ) -> Result<PageResult<User>, UserAdminRepositoryError> {
        let mut query = UserEntity::find().order_by_desc(UserColumn::CreatedAt);

        if let Some(term) = q {
            query = query.filter(
                Condition::any()
                    .add(UserColumn::Username.contains(term))
                    .add(UserColumn::Email.contains(term))
                    .add(UserColumn::DisplayName.contains(term)),
            );
        }

        let total = query
            .clone()
            .count(&*self.db)
            .await
            .map_err(|e| UserAdminRepositoryError::DatabaseError(e.to_string()))?;

        let offset = (page.page.saturating_sub(1) * page.per_page) as u64;
        let models = query
            .offset(offset)
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(|e| UserAdminRepositoryError::DatabaseError(e.to_string()))?;

        Ok(PageResult {
            items: models.into_iter().map(|m| m.into_domain()).collect(),
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }

    async fn get_user(&self, user_id: Uuid) -> Result<User, UserAdminRepositoryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserAdminRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserAdminRepositoryError::UserNotFound)?;

        Ok(model.into_domain())
    }

    async fn update_user(
        &self,
        user_id: Uuid,
        patch: UserAdminPatch,
    ) -> Result<User, UserAdminRepositoryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserAdminRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserAdminRepositoryError::UserNotFound)?;

        let mut active: UserActiveModel = model.into();
        if let Some(display_name) = patch.display_name {
            active.display_name = Set(display_name);
        }
        if let Some(bio) = patch.bio {
            active.bio = Set(Some(bio));
        }
        if let Some(is_premium) = patch.is_premium {
            active.is_premium = Set(is_premium);
        }
        if let Some(plan_type) = patch.plan_type {
            active.plan_type = Set(plan_type.map(|p| p.as_str().to_string()));
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| UserAdminRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.into_domain())
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserAdminRepositoryError> {
        let result = UserEntity::delete_by_id(user_id)
            .exec(&*self.db)
            .await
            .map_err(|e| UserAdminRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserAdminRepositoryError::UserNotFound);
        }

        Ok(())
    }

    async fn set_ban(
        &self,
        user_id: Uuid,
        banned: bool,
        reason: Option<String>,
    ) -> Result<User, UserAdminRepositoryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserAdminRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserAdminRepositoryError::UserNotFound)?;

        let mut active: UserActiveModel = model.into();
        active.is_banned = Set(banned);
        active.ban_reason = Set(reason);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| UserAdminRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.into_domain())
    }
}

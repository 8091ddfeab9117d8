use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, RuntimeErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::account::application::domain::entities::Profile;
use crate::account::application::ports::outgoing::{
    PatchProfileData, ProfileRepository, ProfileRepositoryError,
};
use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct ProfilePostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfilePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch_model(&self, user_id: Uuid) -> Result<UserModel, ProfileRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProfileRepositoryError::UserNotFound)
    }
}

fn into_profile(model: UserModel) -> Profile {
    Profile {
        id: model.id,
        email: model.email,
        username: model.username,
        display_name: model.display_name,
        bio: model.bio,
        image_path: model.image_path,
        background_path: model.background_path,
        has_custom_username: model.has_custom_username,
        is_published: model.is_published,
        is_premium: model.is_premium,
        created_at: model.created_at.with_timezone(&chrono::Utc),
    }
}

fn map_username_conflict(err: DbErr) -> ProfileRepositoryError {
    if let DbErr::Query(RuntimeErr::SqlxError(ref sqlx_err)) = err {
        let msg = sqlx_err.to_string();
        if msg.contains("users_username_key") || msg.contains("idx_users_username_lower") {
            return ProfileRepositoryError::UsernameTaken;
        }
    }
    ProfileRepositoryError::DatabaseError(err.to_string())
}

#[async_trait]
impl ProfileRepository for ProfilePostgres {
    async fn fetch_profile(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(user.map(into_profile))
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: PatchProfileData,
    ) -> Result<Profile, ProfileRepositoryError> {
        // Load first so untouched columns stay as they are.
        self.fetch_model(user_id).await?;

        let mut active = UserActiveModel {
            id: Set(user_id),
            ..Default::default()
        };

        if let Some(display_name) = data.display_name {
            active.display_name = Set(display_name);
        }
        if let Some(bio) = data.bio {
            active.bio = Set(Some(bio));
        }
        if let Some(image_path) = data.image_path {
            active.image_path = Set(Some(image_path));
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(into_profile(updated))
    }

    async fn set_username(
        &self,
        user_id: Uuid,
        username: &str,
    ) -> Result<(), ProfileRepositoryError> {
        self.fetch_model(user_id).await?;

        let active = UserActiveModel {
            id: Set(user_id),
            username: Set(username.to_string()),
            has_custom_username: Set(true),
            ..Default::default()
        };

        active.update(&*self.db).await.map_err(map_username_conflict)?;

        Ok(())
    }

    async fn set_published(&self, user_id: Uuid) -> Result<(), ProfileRepositoryError> {
        self.fetch_model(user_id).await?;

        let active = UserActiveModel {
            id: Set(user_id),
            is_published: Set(true),
            ..Default::default()
        };

        active
            .update(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

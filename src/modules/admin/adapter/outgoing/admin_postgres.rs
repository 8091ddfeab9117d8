use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, RuntimeErr, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::admin::application::domain::entities::AdminRecord;
use crate::admin::application::ports::outgoing::{
    AdminRepository, AdminRepositoryError, NewAdmin,
};
use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity,
};

use super::sea_orm_entity::admins;

#[derive(Clone, Debug)]
pub struct AdminPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn is_user_id_conflict(err: &DbErr) -> bool {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(e)) => {
            e.to_string().contains("admins_user_id_key")
        }
        _ => false,
    }
}

#[async_trait]
impl AdminRepository for AdminPostgres {
    async fn list_admins(&self) -> Result<Vec<AdminRecord>, AdminRepositoryError> {
        let models = admins::Entity::find()
            .order_by_desc(admins::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| AdminRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.into_domain()).collect())
    }

    async fn create_admin(&self, data: NewAdmin) -> Result<AdminRecord, AdminRepositoryError> {
        UserEntity::find_by_id(data.user_id)
            .one(&*self.db)
            .await
            .map_err(|e| AdminRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AdminRepositoryError::UserNotFound)?;

        let permission_names: Vec<String> = data
            .permissions
            .iter()
            .map(|p| p.as_str().to_string())
            .collect();

        let active = admins::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id),
            role: Set(data.role.as_str().to_string()),
            permissions: Set(serde_json::json!(permission_names)),
            created_at: Set(Utc::now().into()),
        };

        let model = active.insert(&*self.db).await.map_err(|e| {
            if is_user_id_conflict(&e) {
                AdminRepositoryError::DuplicateAdmin
            } else {
                AdminRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        let flag = UserActiveModel {
            id: Set(data.user_id),
            is_admin: Set(true),
            ..Default::default()
        };
        flag.update(&*self.db)
            .await
            .map_err(|e| AdminRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.into_domain())
    }

    async fn get_admin(&self, admin_id: Uuid) -> Result<AdminRecord, AdminRepositoryError> {
        let model = admins::Entity::find_by_id(admin_id)
            .one(&*self.db)
            .await
            .map_err(|e| AdminRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AdminRepositoryError::AdminNotFound)?;

        Ok(model.into_domain())
    }

    async fn delete_admin(&self, admin_id: Uuid) -> Result<(), AdminRepositoryError> {
        let model = admins::Entity::find_by_id(admin_id)
            .one(&*self.db)
            .await
            .map_err(|e| AdminRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AdminRepositoryError::AdminNotFound)?;

        let user_id = model.user_id;
        admins::Entity::delete_by_id(admin_id)
            .exec(&*self.db)
            .await
            .map_err(|e| AdminRepositoryError::DatabaseError(e.to_string()))?;

        let flag = UserActiveModel {
            id: Set(user_id),
            is_admin: Set(false),
            ..Default::default()
        };
        flag.update(&*self.db)
            .await
            .map_err(|e| AdminRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::ActiveModel as UserActiveModel;
use crate::upload::application::ports::outgoing::{BackgroundStore, BackgroundStoreError};

#[derive(Clone, Debug)]
pub struct BackgroundPostgres {
    db: Arc<DatabaseConnection>,
}

impl BackgroundPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BackgroundStore for BackgroundPostgres {
    async fn set_background(
        &self,
        user_id: Uuid,
        path: &str,
    ) -> Result<(), BackgroundStoreError> {
        let active = UserActiveModel {
            id: Set(user_id),
            background_path: Set(Some(path.to_string())),
            ..Default::default()
        };

        active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => BackgroundStoreError::UserNotFound,
            other => BackgroundStoreError::DatabaseError(other.to_string()),
        })?;

        Ok(())
    }
}

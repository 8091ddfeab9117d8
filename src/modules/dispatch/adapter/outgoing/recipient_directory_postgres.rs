use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QuerySelect};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::dispatch::application::ports::outgoing::{
    Recipient, RecipientDirectory, RecipientDirectoryError,
};

#[derive(Clone, Debug)]
pub struct RecipientDirectoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecipientDirectoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecipientDirectory for RecipientDirectoryPostgres {
    async fn list_all(&self) -> Result<Vec<Recipient>, RecipientDirectoryError> {
        let rows: Vec<(Uuid, String)> = UserEntity::find()
            .select_only()
            .column(UserColumn::Id)
            .column(UserColumn::Email)
            .into_tuple()
            .all(&*self.db)
            .await
            .map_err(|e| RecipientDirectoryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(user_id, email)| Recipient { user_id, email })
            .collect())
    }

    async fn find_by_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Recipient>, RecipientDirectoryError> {
        let model = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| RecipientDirectoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| Recipient {
            user_id: m.id,
            email: m.email,
        }))
    }
}

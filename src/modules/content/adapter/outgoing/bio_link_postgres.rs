use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::content::application::domain::entities::LinkItem;
use crate::content::application::ports::outgoing::{
    LinkRepository, LinkRepositoryError, PatchLinkData,
};

use super::sea_orm_entity::bio_links::{
    ActiveModel as BioLinkActiveModel, Column as BioLinkColumn, Entity as BioLinkEntity,
};

#[derive(Clone, Debug)]
pub struct BioLinkPostgres {
    db: Arc<DatabaseConnection>,
}

impl BioLinkPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LinkRepository for BioLinkPostgres {
    async fn list_links(&self, owner: Uuid) -> Result<Vec<LinkItem>, LinkRepositoryError> {
        let models = BioLinkEntity::find()
            .filter(BioLinkColumn::UserId.eq(owner))
            .order_by_asc(BioLinkColumn::Position)
            .all(&*self.db)
            .await
            .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.into_domain()).collect())
    }

    async fn create_link(
        &self,
        owner: Uuid,
        label: String,
        url: String,
    ) -> Result<LinkItem, LinkRepositoryError> {
        let last = BioLinkEntity::find()
            .filter(BioLinkColumn::UserId.eq(owner))
            .order_by_desc(BioLinkColumn::Position)
            .one(&*self.db)
            .await
            .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?;

        let next_position = last.map(|m| m.position + 1).unwrap_or(0);

        let active = BioLinkActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner),
            title: Set(label),
            url: Set(url),
            position: Set(next_position),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.into_domain())
    }

    async fn update_link(
        &self,
        owner: Uuid,
        link_id: Uuid,
        data: PatchLinkData,
    ) -> Result<LinkItem, LinkRepositoryError> {
        let existing = BioLinkEntity::find_by_id(link_id)
            .filter(BioLinkColumn::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(LinkRepositoryError::LinkNotFound)?;

        let mut active = BioLinkActiveModel {
            id: Set(existing.id),
            ..Default::default()
        };

        if let Some(label) = data.label {
            active.title = Set(label);
        }
        if let Some(url) = data.url {
            active.url = Set(url);
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.into_domain())
    }

    async fn delete_link(&self, owner: Uuid, link_id: Uuid) -> Result<(), LinkRepositoryError> {
        let result = BioLinkEntity::delete_many()
            .filter(BioLinkColumn::Id.eq(link_id))
            .filter(BioLinkColumn::UserId.eq(owner))
            .exec(&*self.db)
            .await
            .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(LinkRepositoryError::LinkNotFound);
        }

        Ok(())
    }

    async fn set_order(
        &self,
        owner: Uuid,
        ordered_ids: &[Uuid],
    ) -> Result<(), LinkRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?;

        for (position, link_id) in ordered_ids.iter().enumerate() {
            BioLinkEntity::update_many()
                .col_expr(BioLinkColumn::Position, Expr::value(position as i32))
                .filter(BioLinkColumn::Id.eq(*link_id))
                .filter(BioLinkColumn::UserId.eq(owner))
                .exec(&txn)
                .await
                .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?;
        }

        txn.commit()
            .await
            .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

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

use super::sea_orm_entity::social_links::{
    ActiveModel as SocialLinkActiveModel, Column as SocialLinkColumn, Entity as SocialLinkEntity,
};

/// Same contract as the bio link store, backed by the social links
/// table where the label column is the platform name.
#[derive(Clone, Debug)]
pub struct SocialLinkPostgres {
    db: Arc<DatabaseConnection>,
}

impl SocialLinkPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LinkRepository for SocialLinkPostgres {
    async fn list_links(&self, owner: Uuid) -> Result<Vec<LinkItem>, LinkRepositoryError> {
        let models = SocialLinkEntity::find()
            .filter(SocialLinkColumn::UserId.eq(owner))
            .order_by_asc(SocialLinkColumn::Position)
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
        let last = SocialLinkEntity::find()
            .filter(SocialLinkColumn::UserId.eq(owner))
            .order_by_desc(SocialLinkColumn::Position)
            .one(&*self.db)
            .await
            .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?;

        let next_position = last.map(|m| m.position + 1).unwrap_or(0);

        let active = SocialLinkActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(owner),
            platform: Set(label),
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
        let existing = SocialLinkEntity::find_by_id(link_id)
            .filter(SocialLinkColumn::UserId.eq(owner))
            .one(&*self.db)
            .await
            .map_err(|e| LinkRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(LinkRepositoryError::LinkNotFound)?;

        let mut active = SocialLinkActiveModel {
            id: Set(existing.id),
            ..Default::default()
        };

        if let Some(label) = data.label {
            active.platform = Set(label);
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
        let result = SocialLinkEntity::delete_many()
            .filter(SocialLinkColumn::Id.eq(link_id))
            .filter(SocialLinkColumn::UserId.eq(owner))
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
            SocialLinkEntity::update_many()
                .col_expr(SocialLinkColumn::Position, Expr::value(position as i32))
                .filter(SocialLinkColumn::Id.eq(*link_id))
                .filter(SocialLinkColumn::UserId.eq(owner))
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

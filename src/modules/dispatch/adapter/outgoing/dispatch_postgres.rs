use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::dispatch::application::domain::entities::{Notification, SentEmail};
use crate::dispatch::application::ports::outgoing::{
    DispatchRepository, DispatchRepositoryError, NewNotification, NewSentEmail,
};

use super::sea_orm_entity::notifications::{
    ActiveModel as NotificationActiveModel, Column as NotificationColumn,
    Entity as NotificationEntity,
};
use super::sea_orm_entity::sent_emails::{
    ActiveModel as SentEmailActiveModel, Column as SentEmailColumn, Entity as SentEmailEntity,
};

#[derive(Clone, Debug)]
pub struct DispatchPostgres {
    db: Arc<DatabaseConnection>,
}

impl DispatchPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DispatchRepository for DispatchPostgres {
    async fn record_notification(
        &self,
        data: NewNotification,
    ) -> Result<Notification, DispatchRepositoryError> {
        let active = NotificationActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            body: Set(data.body),
            target: Set(data.target.render()),
            recipients: Set(data.recipients),
            created_at: Set(Utc::now().into()),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| DispatchRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.into_domain())
    }

    async fn list_notifications(&self) -> Result<Vec<Notification>, DispatchRepositoryError> {
        let models = NotificationEntity::find()
            .order_by_desc(NotificationColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| DispatchRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.into_domain()).collect())
    }

    async fn record_email(
        &self,
        data: NewSentEmail,
    ) -> Result<SentEmail, DispatchRepositoryError> {
        let active = SentEmailActiveModel {
            id: Set(Uuid::new_v4()),
            subject: Set(data.subject),
            body: Set(data.body),
            target: Set(data.target.render()),
            recipients: Set(data.recipients),
            delivered: Set(data.delivered),
            status: Set(data.status.as_str().to_string()),
            created_at: Set(Utc::now().into()),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| DispatchRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.into_domain())
    }

    async fn list_emails(&self) -> Result<Vec<SentEmail>, DispatchRepositoryError> {
        let models = SentEmailEntity::find()
            .order_by_desc(SentEmailColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| DispatchRepositoryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(|m| m.into_domain()).collect())
    }

    async fn find_email(
        &self,
        email_id: Uuid,
    ) -> Result<Option<SentEmail>, DispatchRepositoryError> {
        let model = SentEmailEntity::find_by_id(email_id)
            .one(&*self.db)
            .await
            .map_err(|e| DispatchRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.into_domain()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::adapter::outgoing::sea_orm_entity::sent_emails::Model as SentEmailModel;
    use crate::dispatch::application::domain::entities::{DispatchTarget, EmailStatus};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn email_model(status: &str) -> SentEmailModel {
        SentEmailModel {
            id: Uuid::new_v4(),
            subject: "Subject".to_string(),
            body: "Body".to_string(),
            target: "all".to_string(),
            recipients: 10,
            delivered: 7,
            status: status.to_string(),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn record_email_returns_the_frozen_outcome() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![email_model("partial")]])
            .into_connection();

        let repo = DispatchPostgres::new(Arc::new(db));

        let record = repo
            .record_email(NewSentEmail {
                subject: "Subject".to_string(),
                body: "Body".to_string(),
                target: DispatchTarget::All,
                recipients: 10,
                delivered: 7,
                status: EmailStatus::Partial,
            })
            .await
            .unwrap();

        assert_eq!(record.status, EmailStatus::Partial);
        assert_eq!(record.target, DispatchTarget::All);
    }

    #[tokio::test]
    async fn find_email_misses_cleanly() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<SentEmailModel>::new()])
            .into_connection();

        let repo = DispatchPostgres::new(Arc::new(db));

        assert!(repo.find_email(Uuid::new_v4()).await.unwrap().is_none());
    }
}

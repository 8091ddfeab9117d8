use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::dispatch::application::domain::entities::{DispatchTarget, EmailStatus, SentEmail};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sent_emails")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub subject: String,
    pub body: String,
    pub target: String,
    pub recipients: i32,
    pub delivered: i32,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> SentEmail {
        SentEmail {
            id: self.id,
            subject: self.subject,
            body: self.body,
            target: DispatchTarget::parse(&self.target).unwrap_or(DispatchTarget::All),
            recipients: self.recipients,
            delivered: self.delivered,
            status: EmailStatus::parse(&self.status).unwrap_or(EmailStatus::Failed),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

use async_trait::async_trait;
use tracing::info;

use crate::dispatch::application::domain::entities::{DispatchTarget, Notification};
use crate::dispatch::application::ports::{
    incoming::use_cases::{SendNotificationCommand, SendNotificationError, SendNotificationUseCase},
    outgoing::{DispatchRepository, NewNotification, RecipientDirectory},
};

#[derive(Debug, Clone)]
pub struct SendNotificationService<R, D>
where
    R: DispatchRepository + Send + Sync,
    D: RecipientDirectory + Send + Sync,
{
    repository: R,
    directory: D,
}

impl<R, D> SendNotificationService<R, D>
where
    R: DispatchRepository + Send + Sync,
    D: RecipientDirectory + Send + Sync,
{
    pub fn new(repository: R, directory: D) -> Self {
        Self {
            repository,
            directory,
        }
    }
}

#[async_trait]
impl<R, D> SendNotificationUseCase for SendNotificationService<R, D>
where
    R: DispatchRepository + Send + Sync,
    D: RecipientDirectory + Send + Sync,
{
    async fn execute(
        &self,
        command: SendNotificationCommand,
    ) -> Result<Notification, SendNotificationError> {
        let recipients = match command.target() {
            DispatchTarget::All => self
                .directory
                .list_all()
                .await
                .map_err(|e| SendNotificationError::RepositoryError(e.to_string()))?
                .len(),
            DispatchTarget::User(user_id) => {
                self.directory
                    .find_by_id(user_id)
                    .await
                    .map_err(|e| SendNotificationError::RepositoryError(e.to_string()))?
                    .ok_or(SendNotificationError::TargetNotFound)?;
                1
            }
        };

        let notification = self
            .repository
            .record_notification(NewNotification {
                title: command.title().to_string(),
                body: command.body().to_string(),
                target: command.target(),
                recipients: recipients as i32,
            })
            .await
            .map_err(|e| SendNotificationError::RepositoryError(e.to_string()))?;

        info!(
            notification_id = %notification.id,
            recipients = notification.recipients,
            "Notification dispatched"
        );

        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::application::ports::outgoing::{
        DispatchRepositoryError, NewSentEmail, Recipient, RecipientDirectoryError,
    };
    use crate::dispatch::application::domain::entities::SentEmail;
    use chrono::Utc;
    use uuid::Uuid;

    struct MockDispatchRepository;

    #[async_trait]
    impl DispatchRepository for MockDispatchRepository {
        async fn record_notification(
            &self,
            data: NewNotification,
        ) -> Result<Notification, DispatchRepositoryError> {
            Ok(Notification {
                id: Uuid::new_v4(),
                title: data.title,
                body: data.body,
                target: data.target,
                recipients: data.recipients,
                created_at: Utc::now(),
            })
        }

        async fn list_notifications(&self) -> Result<Vec<Notification>, DispatchRepositoryError> {
            unimplemented!()
        }

        async fn record_email(
            &self,
            _data: NewSentEmail,
        ) -> Result<SentEmail, DispatchRepositoryError> {
            unimplemented!()
        }

        async fn list_emails(&self) -> Result<Vec<SentEmail>, DispatchRepositoryError> {
            unimplemented!()
        }

        async fn find_email(
            &self,
            _email_id: Uuid,
        ) -> Result<Option<SentEmail>, DispatchRepositoryError> {
            unimplemented!()
        }
    }

    struct MockRecipientDirectory {
        recipients: Vec<Recipient>,
    }

    #[async_trait]
    impl RecipientDirectory for MockRecipientDirectory {
        async fn list_all(&self) -> Result<Vec<Recipient>, RecipientDirectoryError> {
            Ok(self.recipients.clone())
        }

        async fn find_by_id(
            &self,
            user_id: Uuid,
        ) -> Result<Option<Recipient>, RecipientDirectoryError> {
            Ok(self
                .recipients
                .iter()
                .find(|r| r.user_id == user_id)
                .cloned())
        }
    }

    fn recipient() -> Recipient {
        Recipient {
            user_id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn broadcast_counts_every_user_at_dispatch_time() {
        let service = SendNotificationService::new(
            MockDispatchRepository,
            MockRecipientDirectory {
                recipients: vec![recipient(), recipient(), recipient()],
            },
        );

        let command = SendNotificationCommand::new(
            "Maintenance".to_string(),
            "Tonight.".to_string(),
            DispatchTarget::All,
        )
        .unwrap();

        let notification = service.execute(command).await.unwrap();
        assert_eq!(notification.recipients, 3);
    }

    #[tokio::test]
    async fn targeting_a_missing_user_fails_without_a_record() {
        let service = SendNotificationService::new(
            MockDispatchRepository,
            MockRecipientDirectory { recipients: vec![] },
        );

        let command = SendNotificationCommand::new(
            "Hello".to_string(),
            "Just you.".to_string(),
            DispatchTarget::User(Uuid::new_v4()),
        )
        .unwrap();

        let err = service.execute(command).await.unwrap_err();
        assert!(matches!(err, SendNotificationError::TargetNotFound));
    }
}

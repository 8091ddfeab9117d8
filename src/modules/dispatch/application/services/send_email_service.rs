use async_trait::async_trait;
use futures::future::join_all;
use tracing::{info, warn};

use crate::dispatch::application::domain::entities::{DispatchTarget, EmailStatus, SentEmail};
use crate::dispatch::application::ports::{
    incoming::use_cases::{SendEmailCommand, SendEmailError, SendEmailUseCase},
    outgoing::{DispatchRepository, EmailSender, NewSentEmail, Recipient, RecipientDirectory},
};

pub struct SendEmailService<R, D, S>
where
    R: DispatchRepository + Send + Sync,
    D: RecipientDirectory + Send + Sync,
    S: EmailSender + Send + Sync,
{
    repository: R,
    directory: D,
    sender: S,
}

impl<R, D, S> SendEmailService<R, D, S>
where
    R: DispatchRepository + Send + Sync,
    D: RecipientDirectory + Send + Sync,
    S: EmailSender + Send + Sync,
{
    pub fn new(repository: R, directory: D, sender: S) -> Self {
        Self {
            repository,
            directory,
            sender,
        }
    }

    async fn resolve_recipients(
        &self,
        target: DispatchTarget,
    ) -> Result<Vec<Recipient>, SendEmailError> {
        match target {
            DispatchTarget::All => self
                .directory
                .list_all()
                .await
                .map_err(|e| SendEmailError::RepositoryError(e.to_string())),
            DispatchTarget::User(user_id) => {
                let recipient = self
                    .directory
                    .find_by_id(user_id)
                    .await
                    .map_err(|e| SendEmailError::RepositoryError(e.to_string()))?
                    .ok_or(SendEmailError::TargetNotFound)?;
                Ok(vec![recipient])
            }
        }
    }
}

#[async_trait]
impl<R, D, S> SendEmailUseCase for SendEmailService<R, D, S>
where
    R: DispatchRepository + Send + Sync,
    D: RecipientDirectory + Send + Sync,
    S: EmailSender + Send + Sync,
{
    async fn execute(&self, command: SendEmailCommand) -> Result<SentEmail, SendEmailError> {
        let recipients = self.resolve_recipients(command.target()).await?;
        let attempted = recipients.len();

        let command = &command;
        let attempts = recipients.iter().map(|recipient| {
            let address = recipient.email.clone();
            async move {
                let outcome = self
                    .sender
                    .send_email(&address, command.subject(), command.body())
                    .await;
                if let Err(ref reason) = outcome {
                    warn!(to = %address, reason = %reason, "Email delivery failed");
                }
                outcome.is_ok()
            }
        });

        let delivered = join_all(attempts)
            .await
            .into_iter()
            .filter(|ok| *ok)
            .count();

        let status = EmailStatus::from_counts(attempted as i32, delivered as i32);

        let record = self
            .repository
            .record_email(NewSentEmail {
                subject: command.subject().to_string(),
                body: command.body().to_string(),
                target: command.target(),
                recipients: attempted as i32,
                delivered: delivered as i32,
                status,
            })
            .await
            .map_err(|e| SendEmailError::RepositoryError(e.to_string()))?;

        info!(
            email_id = %record.id,
            attempted,
            delivered,
            status = status.as_str(),
            "Email dispatch recorded"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::application::domain::entities::Notification;
    use crate::dispatch::application::ports::outgoing::{
        DispatchRepositoryError, NewNotification, RecipientDirectoryError,
    };
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct MockDispatchRepository {
        recorded: Mutex<Vec<NewSentEmail>>,
    }

    impl MockDispatchRepository {
        fn new() -> Self {
            Self {
                recorded: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl DispatchRepository for MockDispatchRepository {
        async fn record_notification(
            &self,
            _data: NewNotification,
        ) -> Result<Notification, DispatchRepositoryError> {
            unimplemented!()
        }

        async fn list_notifications(&self) -> Result<Vec<Notification>, DispatchRepositoryError> {
            unimplemented!()
        }

        async fn record_email(
            &self,
            data: NewSentEmail,
        ) -> Result<SentEmail, DispatchRepositoryError> {
            self.recorded.lock().unwrap().push(data.clone());
            Ok(SentEmail {
                id: Uuid::new_v4(),
                subject: data.subject,
                body: data.body,
                target: data.target,
                recipients: data.recipients,
                delivered: data.delivered,
                status: data.status,
                created_at: Utc::now(),
            })
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

    /// Delivery fails for any address containing "bounce".
    struct FlakySender;

    #[async_trait]
    impl EmailSender for FlakySender {
        async fn send_email(&self, to: &str, _subject: &str, _body: &str) -> Result<(), String> {
            if to.contains("bounce") {
                Err("mailbox unavailable".to_string())
            } else {
                Ok(())
            }
        }
    }

    fn recipient(email: &str) -> Recipient {
        Recipient {
            user_id: Uuid::new_v4(),
            email: email.to_string(),
        }
    }

    fn command() -> SendEmailCommand {
        SendEmailCommand::new(
            "Subject".to_string(),
            "Body".to_string(),
            DispatchTarget::All,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn full_delivery_freezes_as_sent() {
        let service = SendEmailService::new(
            MockDispatchRepository::new(),
            MockRecipientDirectory {
                recipients: vec![recipient("a@example.com"), recipient("b@example.com")],
            },
            FlakySender,
        );

        let record = service.execute(command()).await.unwrap();
        assert_eq!(record.recipients, 2);
        assert_eq!(record.delivered, 2);
        assert_eq!(record.status, EmailStatus::Sent);
    }

    #[tokio::test]
    async fn one_failure_among_many_is_partial() {
        let service = SendEmailService::new(
            MockDispatchRepository::new(),
            MockRecipientDirectory {
                recipients: vec![
                    recipient("a@example.com"),
                    recipient("bounce@example.com"),
                    recipient("c@example.com"),
                ],
            },
            FlakySender,
        );

        let record = service.execute(command()).await.unwrap();
        assert_eq!(record.recipients, 3);
        assert_eq!(record.delivered, 2);
        assert_eq!(record.status, EmailStatus::Partial);
    }

    #[tokio::test]
    async fn total_failure_is_failed_but_still_recorded() {
        let service = SendEmailService::new(
            MockDispatchRepository::new(),
            MockRecipientDirectory {
                recipients: vec![recipient("bounce1@x.com"), recipient("bounce2@x.com")],
            },
            FlakySender,
        );

        let record = service.execute(command()).await.unwrap();
        assert_eq!(record.delivered, 0);
        assert_eq!(record.status, EmailStatus::Failed);
        assert_eq!(service.repository.recorded.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn single_target_resolves_one_recipient() {
        let target = recipient("only@example.com");
        let target_id = target.user_id;

        let service = SendEmailService::new(
            MockDispatchRepository::new(),
            MockRecipientDirectory {
                recipients: vec![target],
            },
            FlakySender,
        );

        let command = SendEmailCommand::new(
            "Subject".to_string(),
            "Body".to_string(),
            DispatchTarget::User(target_id),
        )
        .unwrap();

        let record = service.execute(command).await.unwrap();
        assert_eq!(record.recipients, 1);
        assert_eq!(record.status, EmailStatus::Sent);
    }

    #[tokio::test]
    async fn missing_target_user_sends_nothing() {
        let service = SendEmailService::new(
            MockDispatchRepository::new(),
            MockRecipientDirectory { recipients: vec![] },
            FlakySender,
        );

        let command = SendEmailCommand::new(
            "Subject".to_string(),
            "Body".to_string(),
            DispatchTarget::User(Uuid::new_v4()),
        )
        .unwrap();

        let err = service.execute(command).await.unwrap_err();
        assert!(matches!(err, SendEmailError::TargetNotFound));
        assert!(service.repository.recorded.lock().unwrap().is_empty());
    }
}

use std::sync::Arc;

use crate::dispatch::application::ports::incoming::use_cases::{
    GetEmailUseCase, ListEmailsUseCase, ListNotificationsUseCase, SendEmailUseCase,
    SendNotificationUseCase,
};

/// One wired set of dispatch operations for the admin surface.
#[derive(Clone)]
pub struct DispatchUseCases {
    pub send_notification: Arc<dyn SendNotificationUseCase + Send + Sync>,
    pub list_notifications: Arc<dyn ListNotificationsUseCase + Send + Sync>,
    pub send_email: Arc<dyn SendEmailUseCase + Send + Sync>,
    pub list_emails: Arc<dyn ListEmailsUseCase + Send + Sync>,
    pub get_email: Arc<dyn GetEmailUseCase + Send + Sync>,
}

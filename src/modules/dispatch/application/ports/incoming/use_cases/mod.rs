pub mod get_email_use_case;
pub mod list_emails_use_case;
pub mod list_notifications_use_case;
pub mod send_email_use_case;
pub mod send_notification_use_case;

pub use get_email_use_case::{GetEmailError, GetEmailUseCase};
pub use list_emails_use_case::{ListEmailsError, ListEmailsUseCase};
pub use list_notifications_use_case::{ListNotificationsError, ListNotificationsUseCase};
pub use send_email_use_case::{SendEmailCommand, SendEmailError, SendEmailUseCase};
pub use send_notification_use_case::{
    DispatchCommandError, SendNotificationCommand, SendNotificationError, SendNotificationUseCase,
};

pub mod admin_emails;
pub mod admin_notifications;

pub use admin_emails::{get_email_handler, list_emails_handler, send_email_handler};
pub use admin_notifications::{list_notifications_handler, send_notification_handler};

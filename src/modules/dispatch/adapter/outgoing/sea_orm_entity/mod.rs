pub mod notifications;
pub mod sent_emails;

pub mod history_services;
pub mod send_email_service;
pub mod send_notification_service;

pub use history_services::{GetEmailService, ListEmailsService, ListNotificationsService};
pub use send_email_service::SendEmailService;
pub use send_notification_service::SendNotificationService;

pub mod dispatch_postgres;
pub mod recipient_directory_postgres;
pub mod sea_orm_entity;
pub mod smtp_sender;

pub use dispatch_postgres::DispatchPostgres;
pub use recipient_directory_postgres::RecipientDirectoryPostgres;
pub use smtp_sender::SmtpEmailSender;

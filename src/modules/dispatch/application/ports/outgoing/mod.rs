pub mod dispatch_repository;
pub mod email_sender;
pub mod recipient_directory;

pub use dispatch_repository::{
    DispatchRepository, DispatchRepositoryError, NewNotification, NewSentEmail,
};
pub use email_sender::EmailSender;
pub use recipient_directory::{Recipient, RecipientDirectory, RecipientDirectoryError};

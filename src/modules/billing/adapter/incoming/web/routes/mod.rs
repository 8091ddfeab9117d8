pub mod cancel_subscription;
pub mod create_checkout;
pub mod get_invoice;
pub mod list_transactions;
pub mod subscription_status;
pub mod verify_session;

pub use cancel_subscription::cancel_subscription_handler;
pub use create_checkout::create_checkout_handler;
pub use get_invoice::get_invoice_handler;
pub use list_transactions::list_transactions_handler;
pub use subscription_status::subscription_status_handler;
pub use verify_session::verify_session_handler;

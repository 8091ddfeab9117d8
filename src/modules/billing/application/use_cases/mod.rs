pub mod cancel_subscription;
pub mod create_checkout;
pub mod get_invoice;
pub mod list_own_transactions;
pub mod subscription_status;
pub mod verify_session;

pub mod billing_gateway;
pub mod premium_repository;
pub mod transaction_store;

pub use billing_gateway::{
    BillingGateway, BillingGatewayError, CheckoutSession, GatewaySession, SessionStatus,
    SubscriptionState,
};
pub use premium_repository::{BillingRepositoryError, PremiumRepository};
pub use transaction_store::{NewTransaction, TransactionStore, TransactionStoreError};

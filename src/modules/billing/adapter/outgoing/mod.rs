pub mod billing_gateway_http;
pub mod premium_postgres;
pub mod sea_orm_entity;
pub mod transaction_postgres;

pub use billing_gateway_http::{BillingGatewayConfig, HttpBillingGateway};
pub use premium_postgres::PremiumPostgres;
pub use transaction_postgres::TransactionPostgres;

pub mod admin_postgres;
pub mod sea_orm_entity;
pub mod transaction_admin_postgres;
pub mod user_admin_postgres;

pub use admin_postgres::AdminPostgres;
pub use transaction_admin_postgres::TransactionAdminPostgres;
pub use user_admin_postgres::UserAdminPostgres;

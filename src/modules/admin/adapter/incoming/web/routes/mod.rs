pub mod admin_admins;
pub mod admin_transactions;
pub mod admin_users;

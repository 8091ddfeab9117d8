pub mod admin_repository;
pub mod paging;
pub mod transaction_admin_repository;
pub mod user_admin_repository;

pub use admin_repository::{AdminRepository, AdminRepositoryError, NewAdmin};
pub use paging::{PageRequest, PageResult};
pub use transaction_admin_repository::{
    TransactionAdminRepository, TransactionAdminRepositoryError, TransactionFilter,
};
pub use user_admin_repository::{UserAdminPatch, UserAdminRepository, UserAdminRepositoryError};

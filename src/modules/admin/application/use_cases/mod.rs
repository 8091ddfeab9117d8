pub mod ban_user;
pub mod create_admin;
pub mod delete_admin;
pub mod delete_transaction;
pub mod delete_user;
pub mod get_admin;
pub mod get_transaction;
pub mod get_user;
pub mod list_admins;
pub mod list_transactions;
pub mod list_users;
pub mod update_user;

pub use ban_user::{
    BanUserError, BanUserUseCase, IBanUserUseCase, IUnbanUserUseCase, UnbanUserUseCase,
};
pub use create_admin::{CreateAdminError, CreateAdminUseCase, ICreateAdminUseCase};
pub use delete_admin::{DeleteAdminError, DeleteAdminUseCase, IDeleteAdminUseCase};
pub use delete_transaction::{
    DeleteTransactionError, DeleteTransactionUseCase, IDeleteTransactionUseCase,
};
pub use delete_user::{DeleteUserError, DeleteUserUseCase, IDeleteUserUseCase};
pub use get_admin::{GetAdminError, GetAdminUseCase, IGetAdminUseCase};
pub use get_transaction::{GetTransactionError, GetTransactionUseCase, IGetTransactionUseCase};
pub use get_user::{GetUserError, GetUserUseCase, IGetUserUseCase};
pub use list_admins::{IListAdminsUseCase, ListAdminsError, ListAdminsUseCase};
pub use list_transactions::{
    IListTransactionsUseCase, ListTransactionsError, ListTransactionsUseCase,
};
pub use list_users::{IListUsersUseCase, ListUsersError, ListUsersUseCase};
pub use update_user::{IUpdateUserUseCase, UpdateUserError, UpdateUserUseCase};

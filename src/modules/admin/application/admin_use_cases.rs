use std::sync::Arc;

use crate::admin::application::use_cases::{
    IBanUserUseCase, ICreateAdminUseCase, IDeleteAdminUseCase, IDeleteTransactionUseCase,
    IDeleteUserUseCase, IGetAdminUseCase, IGetTransactionUseCase, IGetUserUseCase,
    IListAdminsUseCase, IListTransactionsUseCase, IListUsersUseCase, IUnbanUserUseCase,
    IUpdateUserUseCase,
};

/// One wired set of dashboard operations, shared by the admin routes.
#[derive(Clone)]
pub struct AdminUseCases {
    pub list_users: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub get_user: Arc<dyn IGetUserUseCase + Send + Sync>,
    pub update_user: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    pub delete_user: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    pub ban_user: Arc<dyn IBanUserUseCase + Send + Sync>,
    pub unban_user: Arc<dyn IUnbanUserUseCase + Send + Sync>,
    pub list_admins: Arc<dyn IListAdminsUseCase + Send + Sync>,
    pub create_admin: Arc<dyn ICreateAdminUseCase + Send + Sync>,
    pub get_admin: Arc<dyn IGetAdminUseCase + Send + Sync>,
    pub delete_admin: Arc<dyn IDeleteAdminUseCase + Send + Sync>,
    pub list_transactions: Arc<dyn IListTransactionsUseCase + Send + Sync>,
    pub get_transaction: Arc<dyn IGetTransactionUseCase + Send + Sync>,
    pub delete_transaction: Arc<dyn IDeleteTransactionUseCase + Send + Sync>,
}

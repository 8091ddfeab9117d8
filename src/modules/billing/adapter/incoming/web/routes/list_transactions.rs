use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::billing::application::use_cases::list_own_transactions::ListOwnTransactionsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::get_invoice::TransactionResponse;

#[get("/api/billing/transactions")]
pub async fn list_transactions_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .list_own_transactions_use_case
        .execute(user.user_id)
        .await
    {
        Ok(history) => ApiResponse::success(
            history
                .into_iter()
                .map(TransactionResponse::from_domain)
                .collect::<Vec<_>>(),
        ),
        Err(ListOwnTransactionsError::RepositoryError(e)) => {
            error!("Repository error listing transactions: {}", e);
            ApiResponse::internal_error()
        }
    }
}

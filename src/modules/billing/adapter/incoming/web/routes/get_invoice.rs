use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::billing::application::domain::entities::Transaction;
use crate::billing::application::use_cases::get_invoice::GetInvoiceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    pub id: String,
    pub gateway: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
    pub description: Option<String>,
    pub created_at: String,
}

impl TransactionResponse {
    pub fn from_domain(tx: Transaction) -> Self {
        Self {
            id: tx.id.to_string(),
            gateway: tx.gateway,
            amount_cents: tx.amount_cents,
            currency: tx.currency,
            status: tx.status.as_str().to_string(),
            description: tx.description,
            created_at: tx.created_at.to_rfc3339(),
        }
    }
}

#[get("/api/billing/invoice/{transaction_id}")]
pub async fn get_invoice_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let transaction_id = path.into_inner();

    match data
        .get_invoice_use_case
        .execute(user.user_id, transaction_id)
        .await
    {
        Ok(tx) => ApiResponse::success(TransactionResponse::from_domain(tx)),
        Err(GetInvoiceError::TransactionNotFound) => {
            ApiResponse::not_found("TRANSACTION_NOT_FOUND", "Transaction not found")
        }
        Err(GetInvoiceError::RepositoryError(e)) => {
            error!("Repository error fetching invoice: {}", e);
            ApiResponse::internal_error()
        }
    }
}

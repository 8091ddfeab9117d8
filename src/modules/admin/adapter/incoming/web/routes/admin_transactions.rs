use actix_web::{delete, get, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::admin::application::ports::outgoing::{PageRequest, PageResult, TransactionFilter};
use crate::admin::application::use_cases::{
    DeleteTransactionError, GetTransactionError, ListTransactionsError,
};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::billing::application::domain::entities::{Transaction, TransactionStatus};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct AdminTransactionResponse {
    pub id: String,
    pub user_id: String,
    pub gateway: String,
    pub gateway_id: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
    pub description: Option<String>,
    pub created_at: String,
}

impl AdminTransactionResponse {
    pub fn from_domain(tx: Transaction) -> Self {
        Self {
            id: tx.id.to_string(),
            user_id: tx.user_id.to_string(),
            gateway: tx.gateway,
            gateway_id: tx.gateway_id,
            amount_cents: tx.amount_cents,
            currency: tx.currency,
            status: tx.status.as_str().to_string(),
            description: tx.description,
            created_at: tx.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListTransactionsQuery {
    pub status: Option<String>,
    pub gateway: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,

    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub per_page: u32,
}

#[get("/api/admin/transactions")]
pub async fn list_transactions_handler(
    _admin: AdminUser,
    query: web::Query<ListTransactionsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let q = query.into_inner();

    let status = match &q.status {
        Some(raw) => match TransactionStatus::parse(raw) {
            Some(status) => Some(status),
            None => {
                return ApiResponse::bad_request("INVALID_STATUS", "Unknown transaction status")
            }
        },
        None => None,
    };

    let filter = TransactionFilter {
        status,
        gateway: q.gateway,
        from: q.from,
        to: q.to,
    };
    let page = PageRequest {
        page: if q.page == 0 { 1 } else { q.page },
        per_page: if q.per_page == 0 { 20 } else { q.per_page },
    };

    match data
        .admin_use_cases
        .list_transactions
        .execute(filter, page)
        .await
    {
        Ok(result) => ApiResponse::success(PageResult {
            items: result
                .items
                .into_iter()
                .map(AdminTransactionResponse::from_domain)
                .collect::<Vec<_>>(),
            page: result.page,
            per_page: result.per_page,
            total: result.total,
        }),
        Err(ListTransactionsError::RepositoryError(e)) => {
            error!("Repository error listing transactions: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/transactions/{id}")]
pub async fn get_transaction_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .admin_use_cases
        .get_transaction
        .execute(path.into_inner())
        .await
    {
        Ok(tx) => ApiResponse::success(AdminTransactionResponse::from_domain(tx)),
        Err(GetTransactionError::TransactionNotFound) => {
            ApiResponse::not_found("TRANSACTION_NOT_FOUND", "Transaction not found")
        }
        Err(GetTransactionError::RepositoryError(e)) => {
            error!("Repository error fetching transaction: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/transactions/{id}")]
pub async fn delete_transaction_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let transaction_id = path.into_inner();

    match data
        .admin_use_cases
        .delete_transaction
        .execute(transaction_id)
        .await
    {
        Ok(()) => {
            info!(admin_id = %admin.user_id, transaction_id = %transaction_id, "Transaction deleted");
            ApiResponse::no_content()
        }
        Err(DeleteTransactionError::TransactionNotFound) => {
            ApiResponse::not_found("TRANSACTION_NOT_FOUND", "Transaction not found")
        }
        Err(DeleteTransactionError::RepositoryError(e)) => {
            error!("Repository error deleting transaction: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::create_test_jwt_service;
    use actix_web::{test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn unknown_status_filter_is_rejected() {
        let app_state = TestAppStateBuilder::default().build();

        let jwt_service = create_test_jwt_service();
        let token = jwt_service
            .generate_access_token(Uuid::new_v4(), true)
            .unwrap();
        let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(token_provider))
                .service(list_transactions_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/transactions?status=mysterious")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_STATUS");
    }
}

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::PlanType;

/// One recorded payment, appended when a checkout session is verified
/// as paid. `gateway_id` is the gateway's session id and deduplicates
/// repeated verification calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub gateway_id: String,
    pub gateway: String,
    pub amount_cents: i64,
    pub currency: String,
    pub status: TransactionStatus,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Succeeded,
    Pending,
    Failed,
    Refunded,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Succeeded => "succeeded",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Refunded => "refunded",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "succeeded" => Some(TransactionStatus::Succeeded),
            "pending" => Some(TransactionStatus::Pending),
            "failed" => Some(TransactionStatus::Failed),
            "refunded" => Some(TransactionStatus::Refunded),
            _ => None,
        }
    }
}

/// Billing-relevant slice of the user row.
#[derive(Debug, Clone, PartialEq)]
pub struct BillingProfile {
    pub user_id: Uuid,
    pub email: String,
    pub is_premium: bool,
    pub plan_type: Option<PlanType>,
    pub premium_expires_at: Option<DateTime<Utc>>,
    pub subscription_id: Option<String>,
}

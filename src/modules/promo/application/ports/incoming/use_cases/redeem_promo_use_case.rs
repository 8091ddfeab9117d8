use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RedeemPromoCommand {
    user_id: Uuid,
    code: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RedeemPromoCommandError {
    #[error("Code cannot be empty")]
    EmptyCode,
}

impl RedeemPromoCommand {
    pub fn new(user_id: Uuid, code: String) -> Result<Self, RedeemPromoCommandError> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(RedeemPromoCommandError::EmptyCode);
        }

        Ok(Self { user_id, code })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RedemptionResult {
    pub duration_days: i32,
    /// `None` when the redeemer already holds lifetime access.
    pub premium_expires_at: Option<DateTime<Utc>>,
}

/// Unknown, disabled, expired, exhausted and foreign-assigned codes all
/// collapse into `PromoInvalid`. The caller gets one message either way.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RedeemPromoError {
    #[error("Promo code is not valid")]
    PromoInvalid,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RedeemPromoUseCase: Send + Sync {
    async fn execute(&self, command: RedeemPromoCommand) -> Result<RedemptionResult, RedeemPromoError>;
}

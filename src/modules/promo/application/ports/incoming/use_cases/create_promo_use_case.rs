use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::promo::application::domain::entities::PromoCode;

#[derive(Debug, Clone)]
pub struct CreatePromoCommand {
    code: String,
    description: Option<String>,
    duration_days: i32,
    max_redemptions: Option<i32>,
    assigned_user_id: Option<Uuid>,
    expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, thiserror::Error)]
pub enum PromoCommandError {
    #[error("Code cannot be empty")]
    EmptyCode,

    #[error("Code may only contain letters, digits, '-' and '_'")]
    InvalidCode,

    #[error("Code too long")]
    CodeTooLong,

    #[error("Duration must be at least one day")]
    InvalidDuration,

    #[error("Max redemptions must be at least one")]
    InvalidMaxRedemptions,
}

impl CreatePromoCommand {
    /// Codes are stored and matched uppercased, so `summer2025` and
    /// `SUMMER2025` are the same code.
    pub fn new(
        code: String,
        description: Option<String>,
        duration_days: i32,
        max_redemptions: Option<i32>,
        assigned_user_id: Option<Uuid>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Self, PromoCommandError> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(PromoCommandError::EmptyCode);
        }
        if code.len() > 50 {
            return Err(PromoCommandError::CodeTooLong);
        }
        if !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(PromoCommandError::InvalidCode);
        }
        if duration_days < 1 {
            return Err(PromoCommandError::InvalidDuration);
        }
        if matches!(max_redemptions, Some(max) if max < 1) {
            return Err(PromoCommandError::InvalidMaxRedemptions);
        }

        Ok(Self {
            code,
            description,
            duration_days,
            max_redemptions,
            assigned_user_id,
            expires_at,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn duration_days(&self) -> i32 {
        self.duration_days
    }

    pub fn max_redemptions(&self) -> Option<i32> {
        self.max_redemptions
    }

    pub fn assigned_user_id(&self) -> Option<Uuid> {
        self.assigned_user_id
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePromoError {
    #[error("A promo code with this code already exists")]
    DuplicateCode,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePromoUseCase: Send + Sync {
    async fn execute(&self, command: CreatePromoCommand) -> Result<PromoCode, CreatePromoError>;
}

use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{TokenError, TokenProvider};

#[derive(Debug, Clone)]
pub enum RefreshTokenError {
    InvalidToken,
    TokenExpired,
}

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError>;
}

pub struct RefreshTokenUseCase {
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl RefreshTokenUseCase {
    pub fn new(token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self { token_provider }
    }
}

#[async_trait]
impl IRefreshTokenUseCase for RefreshTokenUseCase {
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError> {
        self.token_provider
            .refresh_access_token(refresh_token)
            .map_err(|e| match e {
                TokenError::TokenExpired => RefreshTokenError::TokenExpired,
                _ => RefreshTokenError::InvalidToken,
            })
    }
}

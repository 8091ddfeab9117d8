use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    TokenProvider, TokenRepository,
};

#[derive(Debug, Clone)]
pub enum LogoutError {
    InvalidToken,
    RepositoryError(String),
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, access_token: &str) -> Result<(), LogoutError>;
}

/// Revokes an access token by blacklisting its hash until the token's own
/// expiry; raw tokens never reach storage.
pub struct LogoutUseCase<R>
where
    R: TokenRepository,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> LogoutUseCase<R>
where
    R: TokenRepository,
{
    pub fn new(token_repository: R, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }
}

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[async_trait]
impl<R> ILogoutUseCase for LogoutUseCase<R>
where
    R: TokenRepository + Send + Sync,
{
    async fn execute(&self, access_token: &str) -> Result<(), LogoutError> {
        let claims = self
            .token_provider
            .verify_token(access_token)
            .map_err(|_| LogoutError::InvalidToken)?;

        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .ok_or(LogoutError::InvalidToken)?;

        self.token_repository
            .blacklist_token(&hash_token(access_token), claims.sub, expires_at)
            .await
            .map_err(|e| LogoutError::RepositoryError(e.to_string()))
    }
}

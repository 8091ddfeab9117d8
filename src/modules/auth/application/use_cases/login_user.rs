use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery,
};

// ========================= Login Request =========================

/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            LoginRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ========================= Use Case =========================

#[derive(Debug, Clone, serde::Serialize)]
pub struct LoginResult {
    pub user_id: Uuid,
    pub username: String,
    pub is_admin: bool,
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone)]
pub enum LoginUserError {
    /// Wrong email or password; deliberately indistinguishable.
    InvalidCredentials,
    /// Account is banned; carries the stored reason for the client.
    AccountBanned(String),
    TokenGenerationFailed,
    RepositoryError(String),
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResult, LoginUserError>;
}

pub struct LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    user_query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(
        user_query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginResult, LoginUserError> {
        let user = self
            .user_query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginUserError::RepositoryError(e.to_string()))?
            .ok_or(LoginUserError::InvalidCredentials)?;

        let password_ok = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginUserError::RepositoryError(e.to_string()))?;

        if !password_ok {
            return Err(LoginUserError::InvalidCredentials);
        }

        // Ban check happens after credential verification so the stored
        // reason is only ever shown to the account owner.
        if user.is_banned {
            let reason = user
                .ban_reason
                .unwrap_or_else(|| "Account suspended".to_string());
            tracing::info!(user_id = %user.id, "Rejected login for banned account");
            return Err(LoginUserError::AccountBanned(reason));
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.is_admin)
            .map_err(|_| LoginUserError::TokenGenerationFailed)?;
        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id, user.is_admin)
            .map_err(|_| LoginUserError::TokenGenerationFailed)?;

        Ok(LoginResult {
            user_id: user.id,
            username: user.username,
            is_admin: user.is_admin,
            access_token,
            refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;
    use crate::auth::application::ports::outgoing::{
        HashError, TokenClaims, TokenError, UserRepositoryError,
    };
    use chrono::Utc;

    fn sample_user(is_banned: bool, ban_reason: Option<&str>) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: "person@example.com".to_string(),
            password_hash: "hash".to_string(),
            display_name: "Person".to_string(),
            username: "willow4821".to_string(),
            bio: None,
            image_path: None,
            background_path: None,
            has_custom_username: false,
            is_published: false,
            is_admin: false,
            is_banned,
            ban_reason: ban_reason.map(|s| s.to_string()),
            is_premium: false,
            plan_type: None,
            premium_expires_at: None,
            subscription_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    struct MockUserQuery {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserRepositoryError> {
            Ok(self.user.clone())
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, UserRepositoryError> {
            Ok(self.user.clone())
        }
    }

    struct StubHasher {
        matches: bool,
    }

    #[async_trait]
    impl PasswordHasher for StubHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            unimplemented!()
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(self.matches)
        }
    }

    struct StubTokenProvider;

    impl TokenProvider for StubTokenProvider {
        fn generate_access_token(
            &self,
            _user_id: Uuid,
            _is_admin: bool,
        ) -> Result<String, TokenError> {
            Ok("access".to_string())
        }

        fn generate_refresh_token(
            &self,
            _user_id: Uuid,
            _is_admin: bool,
        ) -> Result<String, TokenError> {
            Ok("refresh".to_string())
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!()
        }

        fn refresh_access_token(&self, _refresh_token: &str) -> Result<String, TokenError> {
            unimplemented!()
        }
    }

    fn request() -> LoginRequest {
        LoginRequest::new("person@example.com".to_string(), "pw".to_string()).unwrap()
    }

    #[tokio::test]
    async fn login_success_returns_tokens() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                user: Some(sample_user(false, None)),
            },
            Arc::new(StubHasher { matches: true }),
            Arc::new(StubTokenProvider),
        );

        let result = use_case.execute(request()).await.unwrap();

        assert_eq!(result.access_token, "access");
        assert_eq!(result.refresh_token, "refresh");
        assert_eq!(result.username, "willow4821");
    }

    #[tokio::test]
    async fn login_unknown_email_is_invalid_credentials() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery { user: None },
            Arc::new(StubHasher { matches: true }),
            Arc::new(StubTokenProvider),
        );

        let result = use_case.execute(request()).await;

        assert!(matches!(result, Err(LoginUserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn login_wrong_password_is_invalid_credentials() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                user: Some(sample_user(false, None)),
            },
            Arc::new(StubHasher { matches: false }),
            Arc::new(StubTokenProvider),
        );

        let result = use_case.execute(request()).await;

        assert!(matches!(result, Err(LoginUserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn login_banned_user_surfaces_stored_reason() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                user: Some(sample_user(true, Some("spam links"))),
            },
            Arc::new(StubHasher { matches: true }),
            Arc::new(StubTokenProvider),
        );

        let result = use_case.execute(request()).await;

        match result {
            Err(LoginUserError::AccountBanned(reason)) => assert_eq!(reason, "spam links"),
            other => panic!("Expected AccountBanned, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn login_banned_without_reason_uses_fallback_message() {
        let use_case = LoginUserUseCase::new(
            MockUserQuery {
                user: Some(sample_user(true, None)),
            },
            Arc::new(StubHasher { matches: true }),
            Arc::new(StubTokenProvider),
        );

        let result = use_case.execute(request()).await;

        match result {
            Err(LoginUserError::AccountBanned(reason)) => {
                assert_eq!(reason, "Account suspended")
            }
            other => panic!("Expected AccountBanned, got {:?}", other),
        }
    }
}

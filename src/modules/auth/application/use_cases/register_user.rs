use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::username::generate_username;
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserRepository, UserRepositoryError,
};

// ========================= Register Request =========================

/// Validated registration request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    email: String,
    password: String,
    display_name: String,
}

#[derive(Debug, Clone)]
pub enum RegisterRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    PasswordTooShort,
    EmptyDisplayName,
    DisplayNameTooLong,
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            RegisterRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            RegisterRequestError::PasswordTooShort => {
                write!(f, "Password must be at least 8 characters")
            }
            RegisterRequestError::EmptyDisplayName => write!(f, "Display name cannot be empty"),
            RegisterRequestError::DisplayNameTooLong => {
                write!(f, "Display name must not exceed 100 characters")
            }
        }
    }
}

impl std::error::Error for RegisterRequestError {}

impl RegisterUserRequest {
    pub fn new(
        email: String,
        password: String,
        display_name: String,
    ) -> Result<Self, RegisterRequestError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        if password.len() < 8 {
            return Err(RegisterRequestError::PasswordTooShort);
        }

        let display_name = display_name.trim().to_string();
        if display_name.is_empty() {
            return Err(RegisterRequestError::EmptyDisplayName);
        }
        if display_name.len() > 100 {
            return Err(RegisterRequestError::DisplayNameTooLong);
        }

        Ok(Self {
            email,
            password,
            display_name,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for RegisterUserRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RegisterUserRequestHelper {
            email: String,
            password: String,
            display_name: String,
        }

        let helper = RegisterUserRequestHelper::deserialize(deserializer)?;
        RegisterUserRequest::new(helper.email, helper.password, helper.display_name)
            .map_err(serde::de::Error::custom)
    }
}

// ========================= Use Case =========================

#[derive(Debug, Clone, serde::Serialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub display_name: String,
}

#[derive(Debug, Clone)]
pub enum RegisterUserError {
    EmailTaken,
    HashingFailed,
    RepositoryError(String),
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterUserRequest)
        -> Result<RegisteredUser, RegisterUserError>;
}

/// Concrete implementation: hashes the password and inserts the user with an
/// auto-generated `word+digits` username, retrying on the rare collision.
pub struct RegisterUserUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

const USERNAME_COLLISION_RETRIES: usize = 5;

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisteredUser, RegisterUserError> {
        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|_| RegisterUserError::HashingFailed)?;

        let mut last_err = None;
        for _ in 0..USERNAME_COLLISION_RETRIES {
            let username = generate_username(&mut rand::thread_rng());

            let data = CreateUserData {
                email: request.email().to_string(),
                password_hash: password_hash.clone(),
                display_name: request.display_name().to_string(),
                username,
            };

            match self.user_repository.create_user(data).await {
                Ok(user) => {
                    return Ok(RegisteredUser {
                        id: user.id,
                        email: user.email,
                        username: user.username,
                        display_name: user.display_name,
                    })
                }
                Err(UserRepositoryError::EmailTaken) => {
                    return Err(RegisterUserError::EmailTaken)
                }
                Err(UserRepositoryError::UsernameTaken) => {
                    // generated name collided, roll a new one
                    last_err = Some(UserRepositoryError::UsernameTaken);
                    continue;
                }
                Err(other) => return Err(RegisterUserError::RepositoryError(other.to_string())),
            }
        }

        Err(RegisterUserError::RepositoryError(
            last_err
                .map(|e| e.to_string())
                .unwrap_or_else(|| "username generation exhausted".to_string()),
        ))
    }
}

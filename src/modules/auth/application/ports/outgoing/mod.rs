pub mod password_hasher;
pub mod token_provider;
pub mod token_repository;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use token_repository::{TokenRepository, TokenRepositoryError};
pub use user_repository::{CreateUserData, UserQuery, UserRepository, UserRepositoryError};

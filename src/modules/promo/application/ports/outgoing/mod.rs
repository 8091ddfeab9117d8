pub mod promo_repository;

pub use promo_repository::{NewPromoCode, PromoRepository, PromoRepositoryError};

pub mod promo_postgres;
pub mod sea_orm_entity;

pub use promo_postgres::PromoPostgres;

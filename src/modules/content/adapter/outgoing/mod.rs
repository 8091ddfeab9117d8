pub mod bio_link_postgres;
pub mod sea_orm_entity;
pub mod social_link_postgres;

pub use bio_link_postgres::BioLinkPostgres;
pub use social_link_postgres::SocialLinkPostgres;

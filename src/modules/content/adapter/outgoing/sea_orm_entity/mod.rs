pub mod bio_links;
pub mod social_links;

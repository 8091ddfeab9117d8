pub mod profile_postgres;
pub mod public_page_postgres;

pub use profile_postgres::ProfilePostgres;
pub use public_page_postgres::PublicPagePostgres;

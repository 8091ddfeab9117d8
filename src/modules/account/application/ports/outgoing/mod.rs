pub mod profile_repository;
pub mod public_page_query;

pub use profile_repository::{PatchProfileData, ProfileRepository, ProfileRepositoryError};
pub use public_page_query::{PublicPageQuery, PublicPageQueryError};

mod claim_username;
mod get_profile;
mod get_public_page;
mod publish_page;
mod update_profile;

pub use claim_username::claim_username_handler;
pub use get_profile::get_profile_handler;
pub use get_public_page::get_public_page_handler;
pub use publish_page::publish_page_handler;
pub use update_profile::update_profile_handler;

pub mod claim_username;
pub mod get_profile;
pub mod get_public_page;
pub mod publish_page;
pub mod update_profile;

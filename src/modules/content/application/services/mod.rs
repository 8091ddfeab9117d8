mod create_link_service;
mod delete_link_service;
mod get_links_service;
mod reorder_links_service;
mod update_link_service;

pub use create_link_service::CreateLinkService;
pub use delete_link_service::DeleteLinkService;
pub use get_links_service::GetLinksService;
pub use reorder_links_service::ReorderLinksService;
pub use update_link_service::UpdateLinkService;

pub mod create_link_use_case;
pub mod delete_link_use_case;
pub mod get_links_use_case;
pub mod reorder_links_use_case;
pub mod update_link_use_case;

pub use create_link_use_case::{
    CreateLinkCommand, CreateLinkError, CreateLinkUseCase, LinkCommandError,
};
pub use delete_link_use_case::{DeleteLinkError, DeleteLinkUseCase};
pub use get_links_use_case::{GetLinksError, GetLinksUseCase};
pub use reorder_links_use_case::{
    ReorderLinksCommand, ReorderLinksCommandError, ReorderLinksError, ReorderLinksUseCase,
};
pub use update_link_use_case::{UpdateLinkCommand, UpdateLinkError, UpdateLinkUseCase};

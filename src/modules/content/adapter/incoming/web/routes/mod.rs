mod bio_links;
mod social_links;

pub use bio_links::{
    create_bio_link_handler, delete_bio_link_handler, get_bio_links_handler,
    reorder_bio_links_handler, update_bio_link_handler,
};
pub use social_links::{
    create_social_link_handler, delete_social_link_handler, get_social_links_handler,
    reorder_social_links_handler, update_social_link_handler,
};

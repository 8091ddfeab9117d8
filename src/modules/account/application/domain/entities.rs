use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Profile state of the authenticated user, as exposed on the
/// account surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub image_path: Option<String>,
    pub background_path: Option<String>,
    pub has_custom_username: bool,
    pub is_published: bool,
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
}

/// A single entry on a published page, either a bio link or a social
/// link depending on the collection it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLink {
    pub label: String,
    pub url: String,
    pub position: i32,
}

/// Everything needed to render a public bio page.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicPage {
    pub username: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub image_path: Option<String>,
    pub background_path: Option<String>,
    pub links: Vec<PageLink>,
    pub socials: Vec<PageLink>,
}

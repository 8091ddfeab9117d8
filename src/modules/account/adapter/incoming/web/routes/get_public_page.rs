use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::account::application::domain::entities::{PageLink, PublicPage};
use crate::account::application::use_cases::get_public_page::GetPublicPageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct PageLinkResponse {
    pub label: String,
    pub url: String,
    pub position: i32,
}

impl From<PageLink> for PageLinkResponse {
    fn from(l: PageLink) -> Self {
        Self {
            label: l.label,
            url: l.url,
            position: l.position,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicPageResponse {
    pub username: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub image_path: Option<String>,
    pub background_path: Option<String>,
    pub links: Vec<PageLinkResponse>,
    pub socials: Vec<PageLinkResponse>,
}

impl From<PublicPage> for PublicPageResponse {
    fn from(p: PublicPage) -> Self {
        Self {
            username: p.username,
            display_name: p.display_name,
            bio: p.bio,
            image_path: p.image_path,
            background_path: p.background_path,
            links: p.links.into_iter().map(PageLinkResponse::from).collect(),
            socials: p.socials.into_iter().map(PageLinkResponse::from).collect(),
        }
    }
}

/// Public, unauthenticated bio page lookup.
#[get("/api/pages/{username}")]
pub async fn get_public_page_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data.get_public_page_use_case.execute(&username).await {
        Ok(page) => ApiResponse::success(PublicPageResponse::from(page)),
        Err(GetPublicPageError::PageNotFound) => {
            ApiResponse::not_found("PAGE_NOT_FOUND", "Page not found")
        }
        Err(GetPublicPageError::RepositoryError(e)) => {
            error!("Repository error fetching public page: {}", e);
            ApiResponse::internal_error()
        }
    }
}

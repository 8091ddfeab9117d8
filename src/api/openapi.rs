use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginResponse, LoginUserInfo, LogoutResponseBody, RefreshTokenRequestDto,
    RefreshTokenResponseBody, RegisterUserResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Link-in-bio API",
        version = "1.0.0",
        description = "API documentation for the link-in-bio profile backend",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,

        // Account endpoints
        // get_profile_handler,
        // update_profile_handler,
        // claim_username_handler,
        // publish_page_handler,
        // get_public_page_handler,

        // Content endpoints
        // bio link and social link CRUD + reorder

        // Billing endpoints
        // subscription status, checkout, verify, cancel, invoices

        // Admin endpoints
        // users, admins, transactions, promos, notifications, emails
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisterUserResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterUserResponse,
            LoginResponse,
            LoginUserInfo,
            LogoutResponseBody,
            RefreshTokenRequestDto,
            RefreshTokenResponseBody
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "account", description = "Profile and public page endpoints"),
        (name = "links", description = "Bio and social link endpoints"),
        (name = "billing", description = "Subscription and payment endpoints"),
        (name = "admin", description = "Dashboard endpoints"),
        (name = "upload", description = "File upload endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}

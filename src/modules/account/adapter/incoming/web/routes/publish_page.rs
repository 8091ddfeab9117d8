use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::account::application::use_cases::publish_page::PublishPageError;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct PublishPageResponse {
    pub username: String,
    pub is_published: bool,
}

#[post("/api/user/publish")]
pub async fn publish_page_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.publish_page_use_case.execute(user.user_id).await {
        Ok(outcome) => ApiResponse::success(PublishPageResponse {
            username: outcome.username,
            is_published: true,
        }),
        Err(PublishPageError::UsernameRequired) => ApiResponse::bad_request(
            "USERNAME_REQUIRED",
            "Claim a username before publishing your page",
        ),
        Err(PublishPageError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(PublishPageError::RepositoryError(e)) => {
            error!("Repository error publishing page: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::application::use_cases::publish_page::{
        IPublishPageUseCase, PublishOutcome,
    };
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::create_test_jwt_service;
    use actix_web::{test, web, App};
    use async_trait::async_trait;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockPublishPageUseCase {
        result: Result<PublishOutcome, PublishPageError>,
    }

    #[async_trait]
    impl IPublishPageUseCase for MockPublishPageUseCase {
        async fn execute(&self, _user_id: Uuid) -> Result<PublishOutcome, PublishPageError> {
            self.result.clone()
        }
    }

    async fn call_publish(result: Result<PublishOutcome, PublishPageError>) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_publish_page(MockPublishPageUseCase { result })
            .build();

        let jwt_service = create_test_jwt_service();
        let token = jwt_service
            .generate_access_token(Uuid::new_v4(), false)
            .unwrap();
        let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(token_provider))
                .service(publish_page_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/user/publish")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_publish_page_success() {
        let (status, body) = call_publish(Ok(PublishOutcome {
            username: "johndoe".to_string(),
            newly_published: true,
        }))
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["username"], "johndoe");
        assert_eq!(body["data"]["is_published"], true);
    }

    #[actix_web::test]
    async fn test_publish_page_already_published_is_still_ok() {
        let (status, body) = call_publish(Ok(PublishOutcome {
            username: "johndoe".to_string(),
            newly_published: false,
        }))
        .await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["is_published"], true);
    }

    #[actix_web::test]
    async fn test_publish_page_without_claimed_username() {
        let (status, body) = call_publish(Err(PublishPageError::UsernameRequired)).await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "USERNAME_REQUIRED");
    }
}

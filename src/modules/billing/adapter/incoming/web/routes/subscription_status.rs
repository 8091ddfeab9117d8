use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::billing::application::use_cases::subscription_status::SubscriptionStatusError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionStatusResponse {
    pub premium: bool,
    pub plan_type: Option<String>,
    pub subscription_status: String,
    pub access_until: Option<String>,
}

#[get("/api/billing/subscription-status")]
pub async fn subscription_status_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.subscription_status_use_case.execute(user.user_id).await {
        Ok(result) => ApiResponse::success(SubscriptionStatusResponse {
            premium: result.premium,
            plan_type: result.plan_type.map(|p| p.as_str().to_string()),
            subscription_status: result.status.as_str().to_string(),
            access_until: result.access_until.map(|t| t.to_rfc3339()),
        }),
        Err(SubscriptionStatusError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(SubscriptionStatusError::RepositoryError(e)) => {
            error!("Repository error reading subscription status: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::PlanType;
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::billing::application::use_cases::subscription_status::{
        ISubscriptionStatusUseCase, SubscriptionFlag, SubscriptionStatusResult,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::create_test_jwt_service;
    use actix_web::{test, web, App};
    use async_trait::async_trait;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockSubscriptionStatusUseCase {
        result: Result<SubscriptionStatusResult, SubscriptionStatusError>,
    }

    #[async_trait]
    impl ISubscriptionStatusUseCase for MockSubscriptionStatusUseCase {
        async fn execute(
            &self,
            _user_id: Uuid,
        ) -> Result<SubscriptionStatusResult, SubscriptionStatusError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn subscription_status_reports_active_premium() {
        let app_state = TestAppStateBuilder::default()
            .with_subscription_status(MockSubscriptionStatusUseCase {
                result: Ok(SubscriptionStatusResult {
                    premium: true,
                    plan_type: Some(PlanType::Monthly),
                    status: SubscriptionFlag::Active,
                    access_until: Some(chrono::Utc::now()),
                }),
            })
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
                .service(subscription_status_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/billing/subscription-status")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["premium"], true);
        assert_eq!(body["data"]["plan_type"], "monthly");
        assert_eq!(body["data"]["subscription_status"], "active");
    }
}

pub mod api;
pub mod modules;
pub mod shared;
pub use modules::account;
pub use modules::admin;
pub use modules::auth;
pub use modules::billing;
pub use modules::content;
pub use modules::dispatch;
pub use modules::promo;
pub use modules::upload;
pub mod health;

use crate::account::adapter::outgoing::{ProfilePostgres, PublicPagePostgres};
use crate::account::application::use_cases::{
    claim_username::{ClaimUsernameUseCase, IClaimUsernameUseCase},
    get_profile::{GetProfileUseCase, IGetProfileUseCase},
    get_public_page::{GetPublicPageUseCase, IGetPublicPageUseCase},
    publish_page::{IPublishPageUseCase, PublishPageUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
};
use crate::admin::adapter::outgoing::{AdminPostgres, TransactionAdminPostgres, UserAdminPostgres};
use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::use_cases::{
    BanUserUseCase, CreateAdminUseCase, DeleteAdminUseCase, DeleteTransactionUseCase,
    DeleteUserUseCase, GetAdminUseCase, GetTransactionUseCase, GetUserUseCase, ListAdminsUseCase,
    ListTransactionsUseCase, ListUsersUseCase, UnbanUserUseCase, UpdateUserUseCase,
};
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::token_blacklist_redis::RedisTokenBlacklist;
use crate::auth::adapter::outgoing::user_auth_postgres::UserAuthPostgres;
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};
use crate::billing::adapter::outgoing::{
    BillingGatewayConfig, HttpBillingGateway, PremiumPostgres, TransactionPostgres,
};
use crate::billing::application::use_cases::{
    cancel_subscription::{CancelSubscriptionUseCase, ICancelSubscriptionUseCase},
    create_checkout::{CreateCheckoutUseCase, ICreateCheckoutUseCase},
    get_invoice::{GetInvoiceUseCase, IGetInvoiceUseCase},
    list_own_transactions::{IListOwnTransactionsUseCase, ListOwnTransactionsUseCase},
    subscription_status::{ISubscriptionStatusUseCase, SubscriptionStatusUseCase},
    verify_session::{IVerifySessionUseCase, VerifySessionUseCase},
};
use crate::content::adapter::outgoing::{BioLinkPostgres, SocialLinkPostgres};
use crate::content::application::link_use_cases::LinkUseCases;
use crate::content::application::services::{
    CreateLinkService, DeleteLinkService, GetLinksService, ReorderLinksService, UpdateLinkService,
};
use crate::dispatch::adapter::outgoing::{
    DispatchPostgres, RecipientDirectoryPostgres, SmtpEmailSender,
};
use crate::dispatch::application::dispatch_use_cases::DispatchUseCases;
use crate::dispatch::application::services::{
    GetEmailService, ListEmailsService, ListNotificationsService, SendEmailService,
    SendNotificationService,
};
use crate::promo::adapter::outgoing::PromoPostgres;
use crate::promo::application::promo_use_cases::PromoUseCases;
use crate::promo::application::services::{
    CreatePromoService, DeletePromoService, ListPromosService, RedeemPromoService,
};
use crate::upload::adapter::outgoing::{BackgroundPostgres, LocalDiskStore};
use crate::upload::application::domain::upload_policy::UploadPolicy;
use crate::upload::application::use_cases::{IUploadBackgroundUseCase, UploadBackgroundUseCase};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub get_profile_use_case: Arc<dyn IGetProfileUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub claim_username_use_case: Arc<dyn IClaimUsernameUseCase + Send + Sync>,
    pub publish_page_use_case: Arc<dyn IPublishPageUseCase + Send + Sync>,
    pub get_public_page_use_case: Arc<dyn IGetPublicPageUseCase + Send + Sync>,
    pub bio_link_use_cases: LinkUseCases,
    pub social_link_use_cases: LinkUseCases,
    pub subscription_status_use_case: Arc<dyn ISubscriptionStatusUseCase + Send + Sync>,
    pub create_checkout_use_case: Arc<dyn ICreateCheckoutUseCase + Send + Sync>,
    pub verify_session_use_case: Arc<dyn IVerifySessionUseCase + Send + Sync>,
    pub cancel_subscription_use_case: Arc<dyn ICancelSubscriptionUseCase + Send + Sync>,
    pub get_invoice_use_case: Arc<dyn IGetInvoiceUseCase + Send + Sync>,
    pub list_own_transactions_use_case: Arc<dyn IListOwnTransactionsUseCase + Send + Sync>,
    pub promo_use_cases: PromoUseCases,
    pub dispatch_use_cases: DispatchUseCases,
    pub admin_use_cases: AdminUseCases,
    pub upload_background_use_case: Arc<dyn IUploadBackgroundUseCase + Send + Sync>,
}

#[cfg(not(tarpaulin_include))]
#[actix_web::main]
async fn start() -> std::io::Result<()> {
    use crate::auth::adapter::outgoing::security::Argon2Hasher;
    use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    // SMTP setup
    let from_email = std::env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if std::env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&host, port, &from_email)
    } else {
        let smtp_server = std::env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Failed to build SMTP transport")
    };

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let password_hasher = Arc::new(Argon2Hasher::new());
    let user_auth = UserAuthPostgres::new(Arc::clone(&db_arc));
    let token_blacklist = RedisTokenBlacklist::new(Arc::clone(&redis_arc));

    let register_user_use_case =
        RegisterUserUseCase::new(user_auth.clone(), password_hasher.clone());
    let login_user_use_case = LoginUserUseCase::new(
        user_auth.clone(),
        password_hasher.clone(),
        Arc::new(jwt_service.clone()),
    );
    let refresh_token_use_case = RefreshTokenUseCase::new(Arc::new(jwt_service.clone()));
    let logout_user_use_case =
        LogoutUseCase::new(token_blacklist.clone(), Arc::new(jwt_service.clone()));

    // Account
    let profile_repo = ProfilePostgres::new(Arc::clone(&db_arc));
    let public_page_query = PublicPagePostgres::new(Arc::clone(&db_arc));

    let get_profile_use_case = GetProfileUseCase::new(profile_repo.clone());
    let update_profile_use_case = UpdateProfileUseCase::new(profile_repo.clone());
    let claim_username_use_case = ClaimUsernameUseCase::new(profile_repo.clone());
    let publish_page_use_case = PublishPageUseCase::new(profile_repo.clone());
    let get_public_page_use_case = GetPublicPageUseCase::new(public_page_query);

    // Content
    let bio_links = BioLinkPostgres::new(Arc::clone(&db_arc));
    let social_links = SocialLinkPostgres::new(Arc::clone(&db_arc));

    let bio_link_use_cases = LinkUseCases {
        create: Arc::new(CreateLinkService::new(bio_links.clone())),
        get_list: Arc::new(GetLinksService::new(bio_links.clone())),
        update: Arc::new(UpdateLinkService::new(bio_links.clone())),
        delete: Arc::new(DeleteLinkService::new(bio_links.clone())),
        reorder: Arc::new(ReorderLinksService::new(bio_links)),
    };
    let social_link_use_cases = LinkUseCases {
        create: Arc::new(CreateLinkService::new(social_links.clone())),
        get_list: Arc::new(GetLinksService::new(social_links.clone())),
        update: Arc::new(UpdateLinkService::new(social_links.clone())),
        delete: Arc::new(DeleteLinkService::new(social_links.clone())),
        reorder: Arc::new(ReorderLinksService::new(social_links)),
    };

    // Billing
    let premium_repo = PremiumPostgres::new(Arc::clone(&db_arc));
    let billing_gateway = HttpBillingGateway::new(BillingGatewayConfig::from_env());
    let transaction_store = TransactionPostgres::new(Arc::clone(&db_arc));

    let subscription_status_use_case =
        SubscriptionStatusUseCase::new(premium_repo.clone(), billing_gateway.clone());
    let create_checkout_use_case =
        CreateCheckoutUseCase::new(premium_repo.clone(), billing_gateway.clone());
    let verify_session_use_case = VerifySessionUseCase::new(
        premium_repo.clone(),
        billing_gateway.clone(),
        transaction_store.clone(),
    );
    let cancel_subscription_use_case =
        CancelSubscriptionUseCase::new(premium_repo.clone(), billing_gateway);
    let get_invoice_use_case = GetInvoiceUseCase::new(transaction_store.clone());
    let list_own_transactions_use_case = ListOwnTransactionsUseCase::new(transaction_store);

    // Promo
    let promo_repo = PromoPostgres::new(Arc::clone(&db_arc));
    let promo_use_cases = PromoUseCases {
        create: Arc::new(CreatePromoService::new(promo_repo.clone())),
        list: Arc::new(ListPromosService::new(promo_repo.clone())),
        delete: Arc::new(DeletePromoService::new(promo_repo.clone())),
        redeem: Arc::new(RedeemPromoService::new(promo_repo, premium_repo)),
    };

    // Dispatch
    let dispatch_repo = DispatchPostgres::new(Arc::clone(&db_arc));
    let recipient_directory = RecipientDirectoryPostgres::new(Arc::clone(&db_arc));
    let dispatch_use_cases = DispatchUseCases {
        send_notification: Arc::new(SendNotificationService::new(
            dispatch_repo.clone(),
            recipient_directory.clone(),
        )),
        list_notifications: Arc::new(ListNotificationsService::new(dispatch_repo.clone())),
        send_email: Arc::new(SendEmailService::new(
            dispatch_repo.clone(),
            recipient_directory,
            smtp_sender,
        )),
        list_emails: Arc::new(ListEmailsService::new(dispatch_repo.clone())),
        get_email: Arc::new(GetEmailService::new(dispatch_repo)),
    };

    // Admin
    let user_admin_repo = UserAdminPostgres::new(Arc::clone(&db_arc));
    let admin_repo = AdminPostgres::new(Arc::clone(&db_arc));
    let transaction_admin_repo = TransactionAdminPostgres::new(Arc::clone(&db_arc));
    let admin_use_cases = AdminUseCases {
        list_users: Arc::new(ListUsersUseCase::new(user_admin_repo.clone())),
        get_user: Arc::new(GetUserUseCase::new(user_admin_repo.clone())),
        update_user: Arc::new(UpdateUserUseCase::new(user_admin_repo.clone())),
        delete_user: Arc::new(DeleteUserUseCase::new(user_admin_repo.clone())),
        ban_user: Arc::new(BanUserUseCase::new(user_admin_repo.clone())),
        unban_user: Arc::new(UnbanUserUseCase::new(user_admin_repo)),
        list_admins: Arc::new(ListAdminsUseCase::new(admin_repo.clone())),
        create_admin: Arc::new(CreateAdminUseCase::new(admin_repo.clone())),
        get_admin: Arc::new(GetAdminUseCase::new(admin_repo.clone())),
        delete_admin: Arc::new(DeleteAdminUseCase::new(admin_repo)),
        list_transactions: Arc::new(ListTransactionsUseCase::new(
            transaction_admin_repo.clone(),
        )),
        get_transaction: Arc::new(GetTransactionUseCase::new(transaction_admin_repo.clone())),
        delete_transaction: Arc::new(DeleteTransactionUseCase::new(transaction_admin_repo)),
    };

    // Upload
    let upload_policy = UploadPolicy::from_env();
    let upload_background_use_case = UploadBackgroundUseCase::new(
        upload_policy.clone(),
        LocalDiskStore::new(upload_policy.upload_dir.clone()),
        BackgroundPostgres::new(Arc::clone(&db_arc)),
    );

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        get_profile_use_case: Arc::new(get_profile_use_case),
        update_profile_use_case: Arc::new(update_profile_use_case),
        claim_username_use_case: Arc::new(claim_username_use_case),
        publish_page_use_case: Arc::new(publish_page_use_case),
        get_public_page_use_case: Arc::new(get_public_page_use_case),
        bio_link_use_cases,
        social_link_use_cases,
        subscription_status_use_case: Arc::new(subscription_status_use_case),
        create_checkout_use_case: Arc::new(create_checkout_use_case),
        verify_session_use_case: Arc::new(verify_session_use_case),
        cancel_subscription_use_case: Arc::new(cancel_subscription_use_case),
        get_invoice_use_case: Arc::new(get_invoice_use_case),
        list_own_transactions_use_case: Arc::new(list_own_transactions_use_case),
        promo_use_cases,
        dispatch_use_cases,
        admin_use_cases,
        upload_background_use_case: Arc::new(upload_background_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(crate::shared::api::custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    // Account
    cfg.service(crate::account::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::claim_username_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::publish_page_handler);
    cfg.service(crate::account::adapter::incoming::web::routes::get_public_page_handler);
    // Links
    cfg.service(crate::content::adapter::incoming::web::routes::get_bio_links_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_bio_link_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_bio_link_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_bio_link_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::reorder_bio_links_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_social_links_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_social_link_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_social_link_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_social_link_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::reorder_social_links_handler);
    // Billing
    cfg.service(crate::billing::adapter::incoming::web::routes::subscription_status_handler);
    cfg.service(crate::billing::adapter::incoming::web::routes::create_checkout_handler);
    cfg.service(crate::billing::adapter::incoming::web::routes::verify_session_handler);
    cfg.service(crate::billing::adapter::incoming::web::routes::cancel_subscription_handler);
    cfg.service(crate::billing::adapter::incoming::web::routes::get_invoice_handler);
    cfg.service(crate::billing::adapter::incoming::web::routes::list_transactions_handler);
    // Promo
    cfg.service(crate::promo::adapter::incoming::web::routes::list_promos_handler);
    cfg.service(crate::promo::adapter::incoming::web::routes::create_promo_handler);
    cfg.service(crate::promo::adapter::incoming::web::routes::delete_promo_handler);
    cfg.service(crate::promo::adapter::incoming::web::routes::redeem_promo_handler);
    // Dispatch
    cfg.service(crate::dispatch::adapter::incoming::web::routes::send_notification_handler);
    cfg.service(crate::dispatch::adapter::incoming::web::routes::list_notifications_handler);
    cfg.service(crate::dispatch::adapter::incoming::web::routes::send_email_handler);
    cfg.service(crate::dispatch::adapter::incoming::web::routes::list_emails_handler);
    cfg.service(crate::dispatch::adapter::incoming::web::routes::get_email_handler);
    // Admin
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_users::list_users_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_users::get_user_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_users::update_user_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_users::delete_user_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_users::ban_user_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_users::unban_user_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_admins::list_admins_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_admins::create_admin_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_admins::get_admin_handler);
    cfg.service(crate::admin::adapter::incoming::web::routes::admin_admins::delete_admin_handler);
    cfg.service(
        crate::admin::adapter::incoming::web::routes::admin_transactions::list_transactions_handler,
    );
    cfg.service(
        crate::admin::adapter::incoming::web::routes::admin_transactions::get_transaction_handler,
    );
    cfg.service(
        crate::admin::adapter::incoming::web::routes::admin_transactions::delete_transaction_handler,
    );
    // Upload
    cfg.service(crate::upload::adapter::incoming::web::routes::upload_background::upload_background_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}

use crate::account::application::use_cases::{
    claim_username::IClaimUsernameUseCase, get_profile::IGetProfileUseCase,
    get_public_page::IGetPublicPageUseCase, publish_page::IPublishPageUseCase,
    update_profile::IUpdateProfileUseCase,
};
use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::auth::application::use_cases::{
    login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    refresh_token::IRefreshTokenUseCase, register_user::IRegisterUserUseCase,
};
use crate::billing::application::use_cases::{
    cancel_subscription::ICancelSubscriptionUseCase, create_checkout::ICreateCheckoutUseCase,
    get_invoice::IGetInvoiceUseCase, list_own_transactions::IListOwnTransactionsUseCase,
    subscription_status::ISubscriptionStatusUseCase, verify_session::IVerifySessionUseCase,
};
use crate::content::application::link_use_cases::LinkUseCases;
use crate::dispatch::application::dispatch_use_cases::DispatchUseCases;
use crate::promo::application::promo_use_cases::PromoUseCases;
use crate::tests::support::stubs::*;
use crate::upload::application::use_cases::IUploadBackgroundUseCase;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    register_user: Option<Arc<dyn IRegisterUserUseCase + Send + Sync>>,
    login_user: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    refresh_token: Option<Arc<dyn IRefreshTokenUseCase + Send + Sync>>,
    logout_user: Option<Arc<dyn ILogoutUseCase + Send + Sync>>,
    get_profile: Option<Arc<dyn IGetProfileUseCase + Send + Sync>>,
    update_profile: Option<Arc<dyn IUpdateProfileUseCase + Send + Sync>>,
    claim_username: Option<Arc<dyn IClaimUsernameUseCase + Send + Sync>>,
    publish_page: Option<Arc<dyn IPublishPageUseCase + Send + Sync>>,
    get_public_page: Option<Arc<dyn IGetPublicPageUseCase + Send + Sync>>,
    bio_links: Option<LinkUseCases>,
    social_links: Option<LinkUseCases>,
    subscription_status: Option<Arc<dyn ISubscriptionStatusUseCase + Send + Sync>>,
    create_checkout: Option<Arc<dyn ICreateCheckoutUseCase + Send + Sync>>,
    verify_session: Option<Arc<dyn IVerifySessionUseCase + Send + Sync>>,
    cancel_subscription: Option<Arc<dyn ICancelSubscriptionUseCase + Send + Sync>>,
    get_invoice: Option<Arc<dyn IGetInvoiceUseCase + Send + Sync>>,
    list_own_transactions: Option<Arc<dyn IListOwnTransactionsUseCase + Send + Sync>>,
    promos: Option<PromoUseCases>,
    dispatch: Option<DispatchUseCases>,
    admin: Option<AdminUseCases>,
    upload_background: Option<Arc<dyn IUploadBackgroundUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Some(Arc::new(StubRegisterUserUseCase)),
            login_user: Some(Arc::new(StubLoginUserUseCase)),
            refresh_token: Some(Arc::new(StubRefreshTokenUseCase)),
            logout_user: Some(Arc::new(StubLogoutUseCase)),
            get_profile: Some(Arc::new(StubGetProfileUseCase)),
            update_profile: Some(Arc::new(StubUpdateProfileUseCase)),
            claim_username: Some(Arc::new(StubClaimUsernameUseCase)),
            publish_page: Some(Arc::new(StubPublishPageUseCase)),
            get_public_page: Some(Arc::new(StubGetPublicPageUseCase)),
            bio_links: Some(stub_link_use_cases()),
            social_links: Some(stub_link_use_cases()),
            subscription_status: Some(Arc::new(StubSubscriptionStatusUseCase)),
            create_checkout: Some(Arc::new(StubCreateCheckoutUseCase)),
            verify_session: Some(Arc::new(StubVerifySessionUseCase)),
            cancel_subscription: Some(Arc::new(StubCancelSubscriptionUseCase)),
            get_invoice: Some(Arc::new(StubGetInvoiceUseCase)),
            list_own_transactions: Some(Arc::new(StubListOwnTransactionsUseCase)),
            promos: Some(stub_promo_use_cases()),
            dispatch: Some(stub_dispatch_use_cases()),
            admin: Some(stub_admin_use_cases()),
            upload_background: Some(Arc::new(StubUploadBackgroundUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Some(Arc::new(uc));
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Some(Arc::new(uc));
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Some(Arc::new(uc));
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout_user = Some(Arc::new(uc));
        self
    }

    pub fn with_get_profile(mut self, uc: impl IGetProfileUseCase + Send + Sync + 'static) -> Self {
        self.get_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl IUpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_claim_username(
        mut self,
        uc: impl IClaimUsernameUseCase + Send + Sync + 'static,
    ) -> Self {
        self.claim_username = Some(Arc::new(uc));
        self
    }

    pub fn with_publish_page(
        mut self,
        uc: impl IPublishPageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.publish_page = Some(Arc::new(uc));
        self
    }

    pub fn with_get_public_page(
        mut self,
        uc: impl IGetPublicPageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_public_page = Some(Arc::new(uc));
        self
    }

    pub fn with_bio_links(mut self, use_cases: LinkUseCases) -> Self {
        self.bio_links = Some(use_cases);
        self
    }

    pub fn with_social_links(mut self, use_cases: LinkUseCases) -> Self {
        self.social_links = Some(use_cases);
        self
    }

    pub fn with_subscription_status(
        mut self,
        uc: impl ISubscriptionStatusUseCase + Send + Sync + 'static,
    ) -> Self {
        self.subscription_status = Some(Arc::new(uc));
        self
    }

    pub fn with_create_checkout(
        mut self,
        uc: impl ICreateCheckoutUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_checkout = Some(Arc::new(uc));
        self
    }

    pub fn with_verify_session(
        mut self,
        uc: impl IVerifySessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.verify_session = Some(Arc::new(uc));
        self
    }

    pub fn with_cancel_subscription(
        mut self,
        uc: impl ICancelSubscriptionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.cancel_subscription = Some(Arc::new(uc));
        self
    }

    pub fn with_get_invoice(mut self, uc: impl IGetInvoiceUseCase + Send + Sync + 'static) -> Self {
        self.get_invoice = Some(Arc::new(uc));
        self
    }

    pub fn with_list_own_transactions(
        mut self,
        uc: impl IListOwnTransactionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_own_transactions = Some(Arc::new(uc));
        self
    }

    pub fn with_promos(mut self, use_cases: PromoUseCases) -> Self {
        self.promos = Some(use_cases);
        self
    }

    pub fn with_dispatch(mut self, use_cases: DispatchUseCases) -> Self {
        self.dispatch = Some(use_cases);
        self
    }

    pub fn with_admin(mut self, use_cases: AdminUseCases) -> Self {
        self.admin = Some(use_cases);
        self
    }

    pub fn with_upload_background(
        mut self,
        uc: impl IUploadBackgroundUseCase + Send + Sync + 'static,
    ) -> Self {
        self.upload_background = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user.unwrap(),
            login_user_use_case: self.login_user.unwrap(),
            refresh_token_use_case: self.refresh_token.unwrap(),
            logout_user_use_case: self.logout_user.unwrap(),
            get_profile_use_case: self.get_profile.unwrap(),
            update_profile_use_case: self.update_profile.unwrap(),
            claim_username_use_case: self.claim_username.unwrap(),
            publish_page_use_case: self.publish_page.unwrap(),
            get_public_page_use_case: self.get_public_page.unwrap(),
            bio_link_use_cases: self.bio_links.unwrap(),
            social_link_use_cases: self.social_links.unwrap(),
            subscription_status_use_case: self.subscription_status.unwrap(),
            create_checkout_use_case: self.create_checkout.unwrap(),
            verify_session_use_case: self.verify_session.unwrap(),
            cancel_subscription_use_case: self.cancel_subscription.unwrap(),
            get_invoice_use_case: self.get_invoice.unwrap(),
            list_own_transactions_use_case: self.list_own_transactions.unwrap(),
            promo_use_cases: self.promos.unwrap(),
            dispatch_use_cases: self.dispatch.unwrap(),
            admin_use_cases: self.admin.unwrap(),
            upload_background_use_case: self.upload_background.unwrap(),
        })
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::domain::entities::{Profile, PublicPage};
use crate::account::application::ports::outgoing::profile_repository::PatchProfileData;
use crate::account::application::use_cases::{
    claim_username::{ClaimUsernameError, IClaimUsernameUseCase},
    get_profile::{GetProfileError, IGetProfileUseCase},
    get_public_page::{GetPublicPageError, IGetPublicPageUseCase},
    publish_page::{IPublishPageUseCase, PublishOutcome, PublishPageError},
    update_profile::{IUpdateProfileUseCase, UpdateProfileError},
};
use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::domain::entities::AdminRecord;
use crate::admin::application::domain::permissions::{AdminRole, Permission};
use crate::admin::application::ports::outgoing::{
    PageRequest, PageResult, TransactionFilter, UserAdminPatch,
};
use crate::admin::application::use_cases::{
    BanUserError, CreateAdminError, DeleteAdminError, DeleteTransactionError, DeleteUserError,
    GetAdminError, GetTransactionError, GetUserError, IBanUserUseCase, ICreateAdminUseCase,
    IDeleteAdminUseCase, IDeleteTransactionUseCase, IDeleteUserUseCase, IGetAdminUseCase,
    IGetTransactionUseCase, IGetUserUseCase, IListAdminsUseCase, IListTransactionsUseCase,
    IListUsersUseCase, IUnbanUserUseCase, IUpdateUserUseCase, ListAdminsError,
    ListTransactionsError, ListUsersError, UpdateUserError,
};
use crate::auth::application::domain::entities::{PlanType, User};
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoginRequest, LoginResult, LoginUserError},
    logout_user::{ILogoutUseCase, LogoutError},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenError},
    register_user::{IRegisterUserUseCase, RegisterUserError, RegisterUserRequest, RegisteredUser},
};
use crate::billing::application::domain::entities::Transaction;
use crate::billing::application::ports::outgoing::billing_gateway::CheckoutSession;
use crate::billing::application::use_cases::{
    cancel_subscription::{CancelOutcome, CancelSubscriptionError, ICancelSubscriptionUseCase},
    create_checkout::{CreateCheckoutError, ICreateCheckoutUseCase},
    get_invoice::{GetInvoiceError, IGetInvoiceUseCase},
    list_own_transactions::{IListOwnTransactionsUseCase, ListOwnTransactionsError},
    subscription_status::{
        ISubscriptionStatusUseCase, SubscriptionStatusError, SubscriptionStatusResult,
    },
    verify_session::{IVerifySessionUseCase, VerifiedSession, VerifySessionError},
};
use crate::content::application::domain::entities::LinkItem;
use crate::content::application::link_use_cases::LinkUseCases;
use crate::content::application::ports::incoming::use_cases::{
    CreateLinkCommand, CreateLinkError, CreateLinkUseCase, DeleteLinkError, DeleteLinkUseCase,
    GetLinksError, GetLinksUseCase, ReorderLinksCommand, ReorderLinksError, ReorderLinksUseCase,
    UpdateLinkCommand, UpdateLinkError, UpdateLinkUseCase,
};
use crate::dispatch::application::dispatch_use_cases::DispatchUseCases;
use crate::dispatch::application::domain::entities::{Notification, SentEmail};
use crate::dispatch::application::ports::incoming::use_cases::{
    GetEmailError, GetEmailUseCase, ListEmailsError, ListEmailsUseCase, ListNotificationsError,
    ListNotificationsUseCase, SendEmailCommand, SendEmailError, SendEmailUseCase,
    SendNotificationCommand, SendNotificationError, SendNotificationUseCase,
};
use crate::promo::application::domain::entities::PromoCode;
use crate::promo::application::ports::incoming::use_cases::{
    CreatePromoCommand, CreatePromoError, CreatePromoUseCase, DeletePromoError, DeletePromoUseCase,
    ListPromosError, ListPromosUseCase, RedeemPromoCommand, RedeemPromoError, RedeemPromoUseCase,
    RedemptionResult,
};
use crate::promo::application::promo_use_cases::PromoUseCases;
use crate::upload::application::use_cases::{IUploadBackgroundUseCase, UploadBackgroundError};

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _request: RegisterUserRequest,
    ) -> Result<RegisteredUser, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResult, LoginUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<String, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _access_token: &str) -> Result<(), LogoutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProfileUseCase;

#[async_trait]
impl IGetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<Profile, GetProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _data: PatchProfileData,
    ) -> Result<Profile, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubClaimUsernameUseCase;

#[async_trait]
impl IClaimUsernameUseCase for StubClaimUsernameUseCase {
    async fn execute(&self, _user_id: Uuid, _requested: &str) -> Result<String, ClaimUsernameError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubPublishPageUseCase;

#[async_trait]
impl IPublishPageUseCase for StubPublishPageUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<PublishOutcome, PublishPageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetPublicPageUseCase;

#[async_trait]
impl IGetPublicPageUseCase for StubGetPublicPageUseCase {
    async fn execute(&self, _username: &str) -> Result<PublicPage, GetPublicPageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateLinkUseCase;

#[async_trait]
impl CreateLinkUseCase for StubCreateLinkUseCase {
    async fn execute(&self, _command: CreateLinkCommand) -> Result<LinkItem, CreateLinkError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetLinksUseCase;

#[async_trait]
impl GetLinksUseCase for StubGetLinksUseCase {
    async fn execute(&self, _owner: Uuid) -> Result<Vec<LinkItem>, GetLinksError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateLinkUseCase;

#[async_trait]
impl UpdateLinkUseCase for StubUpdateLinkUseCase {
    async fn execute(&self, _command: UpdateLinkCommand) -> Result<LinkItem, UpdateLinkError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteLinkUseCase;

#[async_trait]
impl DeleteLinkUseCase for StubDeleteLinkUseCase {
    async fn execute(&self, _owner: Uuid, _link_id: Uuid) -> Result<(), DeleteLinkError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubReorderLinksUseCase;

#[async_trait]
impl ReorderLinksUseCase for StubReorderLinksUseCase {
    async fn execute(&self, _command: ReorderLinksCommand) -> Result<(), ReorderLinksError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSubscriptionStatusUseCase;

#[async_trait]
impl ISubscriptionStatusUseCase for StubSubscriptionStatusUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
    ) -> Result<SubscriptionStatusResult, SubscriptionStatusError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCheckoutUseCase;

#[async_trait]
impl ICreateCheckoutUseCase for StubCreateCheckoutUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _plan: PlanType,
    ) -> Result<CheckoutSession, CreateCheckoutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVerifySessionUseCase;

#[async_trait]
impl IVerifySessionUseCase for StubVerifySessionUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _session_id: &str,
    ) -> Result<VerifiedSession, VerifySessionError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCancelSubscriptionUseCase;

#[async_trait]
impl ICancelSubscriptionUseCase for StubCancelSubscriptionUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<CancelOutcome, CancelSubscriptionError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetInvoiceUseCase;

#[async_trait]
impl IGetInvoiceUseCase for StubGetInvoiceUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _transaction_id: Uuid,
    ) -> Result<Transaction, GetInvoiceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListOwnTransactionsUseCase;

#[async_trait]
impl IListOwnTransactionsUseCase for StubListOwnTransactionsUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<Vec<Transaction>, ListOwnTransactionsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreatePromoUseCase;

#[async_trait]
impl CreatePromoUseCase for StubCreatePromoUseCase {
    async fn execute(&self, _command: CreatePromoCommand) -> Result<PromoCode, CreatePromoError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListPromosUseCase;

#[async_trait]
impl ListPromosUseCase for StubListPromosUseCase {
    async fn execute(&self) -> Result<Vec<PromoCode>, ListPromosError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeletePromoUseCase;

#[async_trait]
impl DeletePromoUseCase for StubDeletePromoUseCase {
    async fn execute(&self, _promo_id: Uuid) -> Result<(), DeletePromoError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRedeemPromoUseCase;

#[async_trait]
impl RedeemPromoUseCase for StubRedeemPromoUseCase {
    async fn execute(
        &self,
        _command: RedeemPromoCommand,
    ) -> Result<RedemptionResult, RedeemPromoError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSendNotificationUseCase;

#[async_trait]
impl SendNotificationUseCase for StubSendNotificationUseCase {
    async fn execute(
        &self,
        _command: SendNotificationCommand,
    ) -> Result<Notification, SendNotificationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListNotificationsUseCase;

#[async_trait]
impl ListNotificationsUseCase for StubListNotificationsUseCase {
    async fn execute(&self) -> Result<Vec<Notification>, ListNotificationsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSendEmailUseCase;

#[async_trait]
impl SendEmailUseCase for StubSendEmailUseCase {
    async fn execute(&self, _command: SendEmailCommand) -> Result<SentEmail, SendEmailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListEmailsUseCase;

#[async_trait]
impl ListEmailsUseCase for StubListEmailsUseCase {
    async fn execute(&self) -> Result<Vec<SentEmail>, ListEmailsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetEmailUseCase;

#[async_trait]
impl GetEmailUseCase for StubGetEmailUseCase {
    async fn execute(&self, _email_id: Uuid) -> Result<SentEmail, GetEmailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListUsersUseCase;

#[async_trait]
impl IListUsersUseCase for StubListUsersUseCase {
    async fn execute(
        &self,
        _q: Option<String>,
        _page: PageRequest,
    ) -> Result<PageResult<User>, ListUsersError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetUserUseCase;

#[async_trait]
impl IGetUserUseCase for StubGetUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<User, GetUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserUseCase;

#[async_trait]
impl IUpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(&self, _user_id: Uuid, _patch: UserAdminPatch) -> Result<User, UpdateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteUserUseCase;

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<(), DeleteUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubBanUserUseCase;

#[async_trait]
impl IBanUserUseCase for StubBanUserUseCase {
    async fn execute(&self, _user_id: Uuid, _reason: String) -> Result<User, BanUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUnbanUserUseCase;

#[async_trait]
impl IUnbanUserUseCase for StubUnbanUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<User, BanUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListAdminsUseCase;

#[async_trait]
impl IListAdminsUseCase for StubListAdminsUseCase {
    async fn execute(&self) -> Result<Vec<AdminRecord>, ListAdminsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateAdminUseCase;

#[async_trait]
impl ICreateAdminUseCase for StubCreateAdminUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _role: AdminRole,
        _overrides: Option<Vec<Permission>>,
    ) -> Result<AdminRecord, CreateAdminError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetAdminUseCase;

#[async_trait]
impl IGetAdminUseCase for StubGetAdminUseCase {
    async fn execute(&self, _admin_id: Uuid) -> Result<AdminRecord, GetAdminError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteAdminUseCase;

#[async_trait]
impl IDeleteAdminUseCase for StubDeleteAdminUseCase {
    async fn execute(&self, _admin_id: Uuid) -> Result<(), DeleteAdminError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListTransactionsUseCase;

#[async_trait]
impl IListTransactionsUseCase for StubListTransactionsUseCase {
    async fn execute(
        &self,
        _filter: TransactionFilter,
        _page: PageRequest,
    ) -> Result<PageResult<Transaction>, ListTransactionsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetTransactionUseCase;

#[async_trait]
impl IGetTransactionUseCase for StubGetTransactionUseCase {
    async fn execute(&self, _transaction_id: Uuid) -> Result<Transaction, GetTransactionError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteTransactionUseCase;

#[async_trait]
impl IDeleteTransactionUseCase for StubDeleteTransactionUseCase {
    async fn execute(&self, _transaction_id: Uuid) -> Result<(), DeleteTransactionError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUploadBackgroundUseCase;

#[async_trait]
impl IUploadBackgroundUseCase for StubUploadBackgroundUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _content_type: &str,
        _data: Vec<u8>,
    ) -> Result<String, UploadBackgroundError> {
        unimplemented!("Not used in this test")
    }
}

pub fn stub_link_use_cases() -> LinkUseCases {
    LinkUseCases {
        create: Arc::new(StubCreateLinkUseCase),
        get_list: Arc::new(StubGetLinksUseCase),
        update: Arc::new(StubUpdateLinkUseCase),
        delete: Arc::new(StubDeleteLinkUseCase),
        reorder: Arc::new(StubReorderLinksUseCase),
    }
}

pub fn stub_promo_use_cases() -> PromoUseCases {
    PromoUseCases {
        create: Arc::new(StubCreatePromoUseCase),
        list: Arc::new(StubListPromosUseCase),
        delete: Arc::new(StubDeletePromoUseCase),
        redeem: Arc::new(StubRedeemPromoUseCase),
    }
}

pub fn stub_dispatch_use_cases() -> DispatchUseCases {
    DispatchUseCases {
        send_notification: Arc::new(StubSendNotificationUseCase),
        list_notifications: Arc::new(StubListNotificationsUseCase),
        send_email: Arc::new(StubSendEmailUseCase),
        list_emails: Arc::new(StubListEmailsUseCase),
        get_email: Arc::new(StubGetEmailUseCase),
    }
}

pub fn stub_admin_use_cases() -> AdminUseCases {
    AdminUseCases {
        list_users: Arc::new(StubListUsersUseCase),
        get_user: Arc::new(StubGetUserUseCase),
        update_user: Arc::new(StubUpdateUserUseCase),
        delete_user: Arc::new(StubDeleteUserUseCase),
        ban_user: Arc::new(StubBanUserUseCase),
        unban_user: Arc::new(StubUnbanUserUseCase),
        list_admins: Arc::new(StubListAdminsUseCase),
        create_admin: Arc::new(StubCreateAdminUseCase),
        get_admin: Arc::new(StubGetAdminUseCase),
        delete_admin: Arc::new(StubDeleteAdminUseCase),
        list_transactions: Arc::new(StubListTransactionsUseCase),
        get_transaction: Arc::new(StubGetTransactionUseCase),
        delete_transaction: Arc::new(StubDeleteTransactionUseCase),
    }
}

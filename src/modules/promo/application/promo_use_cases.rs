use std::sync::Arc;

use crate::promo::application::ports::incoming::use_cases::{
    CreatePromoUseCase, DeletePromoUseCase, ListPromosUseCase, RedeemPromoUseCase,
};

/// One wired set of promo operations. Admin CRUD and the public redeem
/// endpoint share it.
#[derive(Clone)]
pub struct PromoUseCases {
    pub create: Arc<dyn CreatePromoUseCase + Send + Sync>,
    pub list: Arc<dyn ListPromosUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePromoUseCase + Send + Sync>,
    pub redeem: Arc<dyn RedeemPromoUseCase + Send + Sync>,
}

use std::sync::Arc;

use crate::content::application::ports::incoming::use_cases::{
    CreateLinkUseCase, DeleteLinkUseCase, GetLinksUseCase, ReorderLinksUseCase, UpdateLinkUseCase,
};

/// One wired set of link operations. The app carries two of these,
/// one over the bio links table and one over the social links table.
#[derive(Clone)]
pub struct LinkUseCases {
    pub create: Arc<dyn CreateLinkUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetLinksUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateLinkUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteLinkUseCase + Send + Sync>,
    pub reorder: Arc<dyn ReorderLinksUseCase + Send + Sync>,
}

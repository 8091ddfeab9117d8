pub mod create_promo_service;
pub mod delete_promo_service;
pub mod list_promos_service;
pub mod redeem_promo_service;

pub use create_promo_service::CreatePromoService;
pub use delete_promo_service::DeletePromoService;
pub use list_promos_service::ListPromosService;
pub use redeem_promo_service::RedeemPromoService;

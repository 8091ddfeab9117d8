pub mod create_promo_use_case;
pub mod delete_promo_use_case;
pub mod list_promos_use_case;
pub mod redeem_promo_use_case;

pub use create_promo_use_case::{
    CreatePromoCommand, CreatePromoError, CreatePromoUseCase, PromoCommandError,
};
pub use delete_promo_use_case::{DeletePromoError, DeletePromoUseCase};
pub use list_promos_use_case::{ListPromosError, ListPromosUseCase};
pub use redeem_promo_use_case::{
    RedeemPromoCommand, RedeemPromoCommandError, RedeemPromoError, RedeemPromoUseCase,
    RedemptionResult,
};

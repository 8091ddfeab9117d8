pub mod admin_promos;
pub mod redeem_promo;

pub use admin_promos::{create_promo_handler, delete_promo_handler, list_promos_handler};
pub use redeem_promo::redeem_promo_handler;

pub mod domain;
pub mod ports;
pub mod promo_use_cases;
pub mod services;

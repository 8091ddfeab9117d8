pub mod account;
pub mod admin;
pub mod auth;
pub mod billing;
pub mod content;
pub mod dispatch;
pub mod promo;
pub mod upload;

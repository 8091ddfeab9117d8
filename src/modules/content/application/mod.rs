pub mod domain;
pub mod link_use_cases;
pub mod ports;
pub mod services;

pub mod entities;
pub mod username;

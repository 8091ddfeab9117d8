pub mod entities;
pub mod permissions;

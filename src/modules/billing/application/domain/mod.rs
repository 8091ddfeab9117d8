pub mod entities;
pub mod premium;

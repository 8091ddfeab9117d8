pub mod background_store;
pub mod file_store;

pub use background_store::{BackgroundStore, BackgroundStoreError};
pub use file_store::{FileStore, FileStoreError};

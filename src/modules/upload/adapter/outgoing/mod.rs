pub mod background_postgres;
pub mod local_disk_store;

pub use background_postgres::BackgroundPostgres;
pub use local_disk_store::LocalDiskStore;

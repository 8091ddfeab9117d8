pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_bio_links_table;
mod m20250301_000003_create_social_links_table;
mod m20250301_000004_create_promo_codes_table;
mod m20250301_000005_create_notifications_table;
mod m20250301_000006_create_sent_emails_table;
mod m20250301_000007_create_transactions_table;
mod m20250301_000008_create_admins_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_bio_links_table::Migration),
            Box::new(m20250301_000003_create_social_links_table::Migration),
            Box::new(m20250301_000004_create_promo_codes_table::Migration),
            Box::new(m20250301_000005_create_notifications_table::Migration),
            Box::new(m20250301_000006_create_sent_emails_table::Migration),
            Box::new(m20250301_000007_create_transactions_table::Migration),
            Box::new(m20250301_000008_create_admins_table::Migration),
        ]
    }
}

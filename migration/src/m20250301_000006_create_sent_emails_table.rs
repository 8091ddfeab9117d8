use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SentEmails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SentEmails::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SentEmails::Subject)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SentEmails::Body).text().not_null())
                    .col(
                        ColumnDef::new(SentEmails::Target)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SentEmails::Recipients).integer().not_null())
                    .col(ColumnDef::new(SentEmails::Delivered).integer().not_null())
                    .col(
                        ColumnDef::new(SentEmails::Status)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SentEmails::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_sent_emails_created_at
                ON sent_emails (created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SentEmails::Table).to_owned())
            .await
    }
}

// Status ("sent" | "partial" | "failed") is computed once at dispatch time
// and frozen; the table is append-only.
#[derive(DeriveIden)]
enum SentEmails {
    Table,
    Id,
    Subject,
    Body,
    Target,
    Recipients,
    Delivered,
    Status,
    CreatedAt,
}

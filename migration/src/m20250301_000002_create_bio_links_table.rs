use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BioLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BioLinks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BioLinks::UserId).uuid().not_null())
                    .col(ColumnDef::new(BioLinks::Title).string_len(100).not_null())
                    .col(ColumnDef::new(BioLinks::Url).string_len(2048).not_null())
                    .col(ColumnDef::new(BioLinks::Position).integer().not_null())
                    .col(
                        ColumnDef::new(BioLinks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(BioLinks::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bio_links_user")
                            .from(BioLinks::Table, BioLinks::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Page rendering always fetches a user's links in position order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_bio_links_user_position
                ON bio_links (user_id, position);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_bio_links_updated_at
                BEFORE UPDATE ON bio_links
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_bio_links_updated_at ON bio_links")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_bio_links_user_position")
            .await?;

        manager
            .drop_table(Table::drop().table(BioLinks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BioLinks {
    Table,
    Id,
    UserId,
    Title,
    Url,
    Position,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

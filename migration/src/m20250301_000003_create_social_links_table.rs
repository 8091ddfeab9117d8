use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocialLinks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SocialLinks::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(SocialLinks::Platform)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SocialLinks::Url)
                            .string_len(2048)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SocialLinks::Position).integer().not_null())
                    .col(
                        ColumnDef::new(SocialLinks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SocialLinks::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_links_user")
                            .from(SocialLinks::Table, SocialLinks::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_social_links_user_position
                ON social_links (user_id, position);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_social_links_updated_at
                BEFORE UPDATE ON social_links
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
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_social_links_updated_at ON social_links",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_social_links_user_position")
            .await?;

        manager
            .drop_table(Table::drop().table(SocialLinks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SocialLinks {
    Table,
    Id,
    UserId,
    Platform,
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

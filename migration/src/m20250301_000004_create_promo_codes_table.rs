use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PromoCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PromoCodes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PromoCodes::Code)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(PromoCodes::Description).text().null())
                    .col(
                        ColumnDef::new(PromoCodes::DurationDays)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PromoCodes::MaxRedemptions).integer().null())
                    .col(
                        ColumnDef::new(PromoCodes::CurrentRedemptions)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(PromoCodes::AssignedUserId).uuid().null())
                    .col(
                        ColumnDef::new(PromoCodes::ExpiresAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PromoCodes::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(PromoCodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_promo_codes_assigned_user")
                            .from(PromoCodes::Table, PromoCodes::AssignedUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // The counter must never pass the cap, even under concurrent redeems
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE promo_codes
                ADD CONSTRAINT chk_promo_codes_redemptions
                CHECK (max_redemptions IS NULL
                       OR current_redemptions <= max_redemptions);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PromoCodes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PromoCodes {
    Table,
    Id,
    Code,
    Description,
    DurationDays,
    MaxRedemptions,
    CurrentRedemptions,
    AssignedUserId,
    ExpiresAt,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildRoles::Table)
                    .if_not_exists()
                    .col(string(GuildRoles::GuildId).primary_key())
                    .col(string_null(GuildRoles::RaidManagerRoleId))
                    .col(timestamp(GuildRoles::CreatedAt))
                    .col(timestamp(GuildRoles::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildRoles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildRoles {
    Table,
    GuildId,
    RaidManagerRoleId,
    CreatedAt,
    UpdatedAt,
}

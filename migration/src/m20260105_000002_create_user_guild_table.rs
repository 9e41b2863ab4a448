use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserGuild::Table)
                    .if_not_exists()
                    .col(string(UserGuild::UserId))
                    .col(string(UserGuild::GuildId))
                    .col(string(UserGuild::GuildName))
                    .col(string_null(UserGuild::IconHash))
                    .primary_key(
                        Index::create()
                            .col(UserGuild::UserId)
                            .col(UserGuild::GuildId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserGuild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserGuild {
    Table,
    UserId,
    GuildId,
    GuildName,
    IconHash,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildChannels::Table)
                    .if_not_exists()
                    .col(string(GuildChannels::GuildId).primary_key())
                    .col(string(GuildChannels::WelcomeChannelId))
                    .col(string(GuildChannels::GoodbyeChannelId))
                    .col(string(GuildChannels::LogChannelId))
                    .col(string(GuildChannels::BotAnnouncementsChannelId))
                    .col(string_null(GuildChannels::RaidsTd2ChannelId))
                    .col(string_null(GuildChannels::ActivitiesTd2ChannelId))
                    .col(string_null(GuildChannels::IncursionChannelId))
                    .col(string_null(GuildChannels::BuildChannelId))
                    .col(timestamp(GuildChannels::CreatedAt))
                    .col(timestamp(GuildChannels::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildChannels::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildChannels {
    Table,
    GuildId,
    WelcomeChannelId,
    GoodbyeChannelId,
    LogChannelId,
    BotAnnouncementsChannelId,
    RaidsTd2ChannelId,
    ActivitiesTd2ChannelId,
    IncursionChannelId,
    BuildChannelId,
    CreatedAt,
    UpdatedAt,
}

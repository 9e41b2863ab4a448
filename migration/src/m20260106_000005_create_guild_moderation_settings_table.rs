use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildModerationSettings::Table)
                    .if_not_exists()
                    .col(string(GuildModerationSettings::GuildId).primary_key())
                    .col(string_null(GuildModerationSettings::MuteRoleId))
                    .col(integer_null(GuildModerationSettings::MaxWarnsMuteMinutes))
                    .col(integer_null(GuildModerationSettings::MaxWarnsKick))
                    .col(integer_null(GuildModerationSettings::MaxWarnsBanDays))
                    .col(integer_null(GuildModerationSettings::WarnDecayDays))
                    .col(boolean(GuildModerationSettings::AutomodEnabled))
                    .col(boolean(GuildModerationSettings::BlockInvites))
                    .col(boolean(GuildModerationSettings::BlockLinks))
                    .col(integer_null(GuildModerationSettings::CapsThreshold))
                    .col(integer_null(GuildModerationSettings::MentionThreshold))
                    .col(timestamp(GuildModerationSettings::CreatedAt))
                    .col(timestamp(GuildModerationSettings::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(GuildModerationSettings::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildModerationSettings {
    Table,
    GuildId,
    MuteRoleId,
    MaxWarnsMuteMinutes,
    MaxWarnsKick,
    MaxWarnsBanDays,
    WarnDecayDays,
    AutomodEnabled,
    BlockInvites,
    BlockLinks,
    CapsThreshold,
    MentionThreshold,
    CreatedAt,
    UpdatedAt,
}

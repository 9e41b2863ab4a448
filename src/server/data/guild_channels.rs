//! Channel bindings data repository.
//!
//! Manages the `guild_channels` record holding which Discord channels the bot
//! posts welcomes, goodbyes, logs and announcements to, plus the optional
//! feature channels. One record per guild, keyed by the guild id.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::guild_settings::{GuildChannelConfig, UpsertGuildChannelsParam};

/// Repository providing database operations for channel bindings.
pub struct GuildChannelsRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> GuildChannelsRepository<'a, C> {
    /// Creates a new GuildChannelsRepository instance.
    ///
    /// # Arguments
    /// - `conn` - Database connection or open transaction
    ///
    /// # Returns
    /// - `GuildChannelsRepository` - New repository instance
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Gets the channel bindings for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID as a string slice
    ///
    /// # Returns
    /// - `Ok(Some(GuildChannelConfig))` - Bindings found for the guild
    /// - `Ok(None)` - No bindings stored for this guild yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(
        &self,
        guild_id: &str,
    ) -> Result<Option<GuildChannelConfig>, DbErr> {
        let entity = entity::prelude::GuildChannels::find()
            .filter(entity::guild_channels::Column::GuildId.eq(guild_id))
            .one(self.conn)
            .await?;

        Ok(entity.map(GuildChannelConfig::from_entity))
    }

    /// Creates or fully replaces the channel bindings for a guild.
    ///
    /// Every column is overwritten with the provided values; optional channels
    /// not present in `param` end up NULL regardless of what was stored
    /// before. `created_at` is preserved on update and `updated_at` refreshed.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID the bindings belong to
    /// - `param` - Full replacement values for the record
    ///
    /// # Returns
    /// - `Ok(GuildChannelConfig)` - The created or updated bindings
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        guild_id: &str,
        param: UpsertGuildChannelsParam,
    ) -> Result<GuildChannelConfig, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::GuildChannels::insert(entity::guild_channels::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            welcome_channel_id: ActiveValue::Set(param.welcome_channel_id),
            goodbye_channel_id: ActiveValue::Set(param.goodbye_channel_id),
            log_channel_id: ActiveValue::Set(param.log_channel_id),
            bot_announcements_channel_id: ActiveValue::Set(param.bot_announcements_channel_id),
            raids_td2_channel_id: ActiveValue::Set(param.raids_td2_channel_id),
            activities_td2_channel_id: ActiveValue::Set(param.activities_td2_channel_id),
            incursion_channel_id: ActiveValue::Set(param.incursion_channel_id),
            build_channel_id: ActiveValue::Set(param.build_channel_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::guild_channels::Column::GuildId)
                .update_columns([
                    entity::guild_channels::Column::WelcomeChannelId,
                    entity::guild_channels::Column::GoodbyeChannelId,
                    entity::guild_channels::Column::LogChannelId,
                    entity::guild_channels::Column::BotAnnouncementsChannelId,
                    entity::guild_channels::Column::RaidsTd2ChannelId,
                    entity::guild_channels::Column::ActivitiesTd2ChannelId,
                    entity::guild_channels::Column::IncursionChannelId,
                    entity::guild_channels::Column::BuildChannelId,
                    entity::guild_channels::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.conn)
        .await?;

        Ok(GuildChannelConfig::from_entity(entity))
    }
}

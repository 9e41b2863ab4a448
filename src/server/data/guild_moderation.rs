//! Moderation settings data repository.
//!
//! Manages the `guild_moderation_settings` record holding the warn/mute/kick
//! escalation thresholds and automod flags. One record per guild, keyed by
//! the guild id.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::guild_settings::{GuildModerationConfig, UpsertGuildModerationParam};

/// Repository providing database operations for moderation settings.
pub struct GuildModerationRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> GuildModerationRepository<'a, C> {
    /// Creates a new GuildModerationRepository instance.
    ///
    /// # Arguments
    /// - `conn` - Database connection or open transaction
    ///
    /// # Returns
    /// - `GuildModerationRepository` - New repository instance
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Gets the moderation settings for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID as a string slice
    ///
    /// # Returns
    /// - `Ok(Some(GuildModerationConfig))` - Settings found for the guild
    /// - `Ok(None)` - No settings stored for this guild yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(
        &self,
        guild_id: &str,
    ) -> Result<Option<GuildModerationConfig>, DbErr> {
        let entity = entity::prelude::GuildModerationSettings::find()
            .filter(entity::guild_moderation_settings::Column::GuildId.eq(guild_id))
            .one(self.conn)
            .await?;

        Ok(entity.map(GuildModerationConfig::from_entity))
    }

    /// Creates or fully replaces the moderation settings for a guild.
    ///
    /// Thresholds omitted from `param` end up NULL, which the bot treats as
    /// the corresponding escalation step being disabled. `created_at` is
    /// preserved on update and `updated_at` refreshed.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID the settings belong to
    /// - `param` - Full replacement values for the record
    ///
    /// # Returns
    /// - `Ok(GuildModerationConfig)` - The created or updated settings
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        guild_id: &str,
        param: UpsertGuildModerationParam,
    ) -> Result<GuildModerationConfig, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::GuildModerationSettings::insert(
            entity::guild_moderation_settings::ActiveModel {
                guild_id: ActiveValue::Set(guild_id.to_string()),
                mute_role_id: ActiveValue::Set(param.mute_role_id),
                max_warns_mute_minutes: ActiveValue::Set(param.max_warns_mute_minutes),
                max_warns_kick: ActiveValue::Set(param.max_warns_kick),
                max_warns_ban_days: ActiveValue::Set(param.max_warns_ban_days),
                warn_decay_days: ActiveValue::Set(param.warn_decay_days),
                automod_enabled: ActiveValue::Set(param.automod_enabled),
                block_invites: ActiveValue::Set(param.block_invites),
                block_links: ActiveValue::Set(param.block_links),
                caps_threshold: ActiveValue::Set(param.caps_threshold),
                mention_threshold: ActiveValue::Set(param.mention_threshold),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            },
        )
        .on_conflict(
            OnConflict::column(entity::guild_moderation_settings::Column::GuildId)
                .update_columns([
                    entity::guild_moderation_settings::Column::MuteRoleId,
                    entity::guild_moderation_settings::Column::MaxWarnsMuteMinutes,
                    entity::guild_moderation_settings::Column::MaxWarnsKick,
                    entity::guild_moderation_settings::Column::MaxWarnsBanDays,
                    entity::guild_moderation_settings::Column::WarnDecayDays,
                    entity::guild_moderation_settings::Column::AutomodEnabled,
                    entity::guild_moderation_settings::Column::BlockInvites,
                    entity::guild_moderation_settings::Column::BlockLinks,
                    entity::guild_moderation_settings::Column::CapsThreshold,
                    entity::guild_moderation_settings::Column::MentionThreshold,
                    entity::guild_moderation_settings::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.conn)
        .await?;

        Ok(GuildModerationConfig::from_entity(entity))
    }
}

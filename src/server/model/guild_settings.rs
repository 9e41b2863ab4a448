//! Domain models for guild configuration.
//!
//! A guild's configuration spans three records sharing the guild id as key:
//! channel bindings, role bindings and moderation settings. They are always
//! written together (see `GuildSettingsStore`) but read individually, so this
//! module carries one read model per record plus the validated write-side
//! record produced by the settings schema.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::model::settings::GuildSettingsDto;

/// Accumulated per-field validation failures.
///
/// Keys are the camelCase wire names of the offending fields; each field can
/// carry several messages. Collection is exhaustive so a single response can
/// report every problem in the submitted form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldViolations {
    map: BTreeMap<String, Vec<String>>,
}

impl FieldViolations {
    /// Records a violation message against a field.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.map
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// True when no violations have been recorded.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// True when the field has at least one recorded violation.
    pub fn contains(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    /// Consumes the collection into the wire-format detail map.
    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.map
    }
}

/// Fully-typed, fully-defaulted guild configuration produced by a successful
/// schema decode.
///
/// Optional channel/role ids are still plain strings here, with `""` meaning
/// unset; they are normalized to `None` when converted into the per-table
/// upsert parameters, so an empty string is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSettings {
    pub welcome_channel_id: String,
    pub goodbye_channel_id: String,
    pub log_channel_id: String,
    pub bot_announcements_channel_id: String,
    pub raids_td2_channel_id: String,
    pub activities_td2_channel_id: String,
    pub incursion_channel_id: String,
    pub build_channel_id: String,
    pub raid_manager_role_id: String,
    pub mute_role_id: String,
    pub max_warns_mute_minutes: Option<i32>,
    pub max_warns_kick: Option<i32>,
    pub max_warns_ban_days: Option<i32>,
    pub warn_decay_days: Option<i32>,
    pub automod_enabled: bool,
    pub block_invites: bool,
    pub block_links: bool,
    pub caps_threshold: Option<i32>,
    pub mention_threshold: Option<i32>,
}

impl ValidatedSettings {
    /// Channel-binding slice of the configuration, empties normalized to NULL.
    pub fn channel_bindings(&self) -> UpsertGuildChannelsParam {
        UpsertGuildChannelsParam {
            welcome_channel_id: self.welcome_channel_id.clone(),
            goodbye_channel_id: self.goodbye_channel_id.clone(),
            log_channel_id: self.log_channel_id.clone(),
            bot_announcements_channel_id: self.bot_announcements_channel_id.clone(),
            raids_td2_channel_id: normalize_optional_id(&self.raids_td2_channel_id),
            activities_td2_channel_id: normalize_optional_id(&self.activities_td2_channel_id),
            incursion_channel_id: normalize_optional_id(&self.incursion_channel_id),
            build_channel_id: normalize_optional_id(&self.build_channel_id),
        }
    }

    /// Role-binding slice of the configuration.
    pub fn role_bindings(&self) -> UpsertGuildRolesParam {
        UpsertGuildRolesParam {
            raid_manager_role_id: normalize_optional_id(&self.raid_manager_role_id),
        }
    }

    /// Moderation slice of the configuration.
    pub fn moderation(&self) -> UpsertGuildModerationParam {
        UpsertGuildModerationParam {
            mute_role_id: normalize_optional_id(&self.mute_role_id),
            max_warns_mute_minutes: self.max_warns_mute_minutes,
            max_warns_kick: self.max_warns_kick,
            max_warns_ban_days: self.max_warns_ban_days,
            warn_decay_days: self.warn_decay_days,
            automod_enabled: self.automod_enabled,
            block_invites: self.block_invites,
            block_links: self.block_links,
            caps_threshold: self.caps_threshold,
            mention_threshold: self.mention_threshold,
        }
    }
}

/// Unset optional ids arrive as `""` from the form; they are stored as NULL,
/// never as an empty string.
fn normalize_optional_id(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parameters for upserting a guild's channel bindings.
#[derive(Debug, Clone)]
pub struct UpsertGuildChannelsParam {
    pub welcome_channel_id: String,
    pub goodbye_channel_id: String,
    pub log_channel_id: String,
    pub bot_announcements_channel_id: String,
    pub raids_td2_channel_id: Option<String>,
    pub activities_td2_channel_id: Option<String>,
    pub incursion_channel_id: Option<String>,
    pub build_channel_id: Option<String>,
}

/// Parameters for upserting a guild's role bindings.
#[derive(Debug, Clone)]
pub struct UpsertGuildRolesParam {
    pub raid_manager_role_id: Option<String>,
}

/// Parameters for upserting a guild's moderation settings.
#[derive(Debug, Clone)]
pub struct UpsertGuildModerationParam {
    pub mute_role_id: Option<String>,
    pub max_warns_mute_minutes: Option<i32>,
    pub max_warns_kick: Option<i32>,
    pub max_warns_ban_days: Option<i32>,
    pub warn_decay_days: Option<i32>,
    pub automod_enabled: bool,
    pub block_invites: bool,
    pub block_links: bool,
    pub caps_threshold: Option<i32>,
    pub mention_threshold: Option<i32>,
}

/// Stored channel bindings for a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildChannelConfig {
    pub guild_id: String,
    pub welcome_channel_id: String,
    pub goodbye_channel_id: String,
    pub log_channel_id: String,
    pub bot_announcements_channel_id: String,
    pub raids_td2_channel_id: Option<String>,
    pub activities_td2_channel_id: Option<String>,
    pub incursion_channel_id: Option<String>,
    pub build_channel_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuildChannelConfig {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::guild_channels::Model) -> Self {
        Self {
            guild_id: entity.guild_id,
            welcome_channel_id: entity.welcome_channel_id,
            goodbye_channel_id: entity.goodbye_channel_id,
            log_channel_id: entity.log_channel_id,
            bot_announcements_channel_id: entity.bot_announcements_channel_id,
            raids_td2_channel_id: entity.raids_td2_channel_id,
            activities_td2_channel_id: entity.activities_td2_channel_id,
            incursion_channel_id: entity.incursion_channel_id,
            build_channel_id: entity.build_channel_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Stored role bindings for a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRoleConfig {
    pub guild_id: String,
    pub raid_manager_role_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuildRoleConfig {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::guild_roles::Model) -> Self {
        Self {
            guild_id: entity.guild_id,
            raid_manager_role_id: entity.raid_manager_role_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Stored moderation settings for a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildModerationConfig {
    pub guild_id: String,
    pub mute_role_id: Option<String>,
    pub max_warns_mute_minutes: Option<i32>,
    pub max_warns_kick: Option<i32>,
    pub max_warns_ban_days: Option<i32>,
    pub warn_decay_days: Option<i32>,
    pub automod_enabled: bool,
    pub block_invites: bool,
    pub block_links: bool,
    pub caps_threshold: Option<i32>,
    pub mention_threshold: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuildModerationConfig {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::guild_moderation_settings::Model) -> Self {
        Self {
            guild_id: entity.guild_id,
            mute_role_id: entity.mute_role_id,
            max_warns_mute_minutes: entity.max_warns_mute_minutes,
            max_warns_kick: entity.max_warns_kick,
            max_warns_ban_days: entity.max_warns_ban_days,
            warn_decay_days: entity.warn_decay_days,
            automod_enabled: entity.automod_enabled,
            block_invites: entity.block_invites,
            block_links: entity.block_links,
            caps_threshold: entity.caps_threshold,
            mention_threshold: entity.mention_threshold,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Everything stored for one guild, any part of which may not exist yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuildConfiguration {
    pub channels: Option<GuildChannelConfig>,
    pub roles: Option<GuildRoleConfig>,
    pub moderation: Option<GuildModerationConfig>,
}

impl GuildConfiguration {
    /// Flattens the stored records into initial form values.
    ///
    /// Missing records and NULL optionals come out as empty strings (for id
    /// fields) or `None`/`false` (for thresholds and flags) so the form always
    /// receives a complete value set.
    pub fn into_form_dto(self) -> GuildSettingsDto {
        let channels = self.channels;
        let roles = self.roles;
        let moderation = self.moderation;

        GuildSettingsDto {
            welcome_channel_id: channels
                .as_ref()
                .map(|c| c.welcome_channel_id.clone())
                .unwrap_or_default(),
            goodbye_channel_id: channels
                .as_ref()
                .map(|c| c.goodbye_channel_id.clone())
                .unwrap_or_default(),
            log_channel_id: channels
                .as_ref()
                .map(|c| c.log_channel_id.clone())
                .unwrap_or_default(),
            bot_announcements_channel_id: channels
                .as_ref()
                .map(|c| c.bot_announcements_channel_id.clone())
                .unwrap_or_default(),
            raids_td2_channel_id: channels
                .as_ref()
                .and_then(|c| c.raids_td2_channel_id.clone())
                .unwrap_or_default(),
            activities_td2_channel_id: channels
                .as_ref()
                .and_then(|c| c.activities_td2_channel_id.clone())
                .unwrap_or_default(),
            incursion_channel_id: channels
                .as_ref()
                .and_then(|c| c.incursion_channel_id.clone())
                .unwrap_or_default(),
            build_channel_id: channels
                .as_ref()
                .and_then(|c| c.build_channel_id.clone())
                .unwrap_or_default(),
            raid_manager_role_id: roles
                .as_ref()
                .and_then(|r| r.raid_manager_role_id.clone())
                .unwrap_or_default(),
            mute_role_id: moderation
                .as_ref()
                .and_then(|m| m.mute_role_id.clone())
                .unwrap_or_default(),
            max_warns_mute_minutes: moderation.as_ref().and_then(|m| m.max_warns_mute_minutes),
            max_warns_kick: moderation.as_ref().and_then(|m| m.max_warns_kick),
            max_warns_ban_days: moderation.as_ref().and_then(|m| m.max_warns_ban_days),
            warn_decay_days: moderation.as_ref().and_then(|m| m.warn_decay_days),
            automod_enabled: moderation.as_ref().is_some_and(|m| m.automod_enabled),
            block_invites: moderation.as_ref().is_some_and(|m| m.block_invites),
            block_links: moderation.as_ref().is_some_and(|m| m.block_links),
            caps_threshold: moderation.as_ref().and_then(|m| m.caps_threshold),
            mention_threshold: moderation.as_ref().and_then(|m| m.mention_threshold),
        }
    }
}

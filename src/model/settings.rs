use serde::{Deserialize, Serialize};

/// Guild configuration as the settings form sees it.
///
/// Optional channel/role ids are carried as plain strings with `""` meaning
/// unset; the server normalizes empties to NULL at the persistence boundary
/// and denormalizes them back when serving initial form values. Numeric
/// thresholds stay `None` when unset so inputs render blank.
///
/// The POST path does not deserialize into this type: submitted payloads go
/// through the coercing settings schema, which also accepts numeric strings
/// and boolean strings. This struct is the strictly-typed subset the client
/// itself sends.
#[derive(Serialize, Deserialize, PartialEq, Clone, Default)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GuildSettingsDto {
    // Channels
    pub welcome_channel_id: String,
    pub goodbye_channel_id: String,
    pub log_channel_id: String,
    pub bot_announcements_channel_id: String,
    pub raids_td2_channel_id: String,
    pub activities_td2_channel_id: String,
    pub incursion_channel_id: String,
    pub build_channel_id: String,

    // Roles
    pub raid_manager_role_id: String,

    // Moderation
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

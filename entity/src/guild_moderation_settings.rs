use sea_orm::entity::prelude::*;

/// Moderation thresholds and automod flags for a guild.
///
/// Integer thresholds are nullable; a NULL threshold disables the
/// corresponding escalation step in the bot.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "guild_moderation_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
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
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

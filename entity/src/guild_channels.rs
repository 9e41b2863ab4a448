use sea_orm::entity::prelude::*;

/// Channel bindings for a guild.
///
/// The first four channels are required for the bot to operate; the remaining
/// feature channels are optional and stored as NULL when unset, never as an
/// empty string.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "guild_channels")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub welcome_channel_id: String,
    pub goodbye_channel_id: String,
    pub log_channel_id: String,
    pub bot_announcements_channel_id: String,
    pub raids_td2_channel_id: Option<String>,
    pub activities_td2_channel_id: Option<String>,
    pub incursion_channel_id: Option<String>,
    pub build_channel_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use serde::{Deserialize, Serialize};

/// Guild the logged-in user can administer, as shown on the guild picker.
#[derive(Serialize, Deserialize, PartialEq, Clone)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ManagedGuildDto {
    pub guild_id: String,
    pub name: String,
    pub icon_hash: Option<String>,
}

/// Live guild metadata fetched from Discord for the overview page.
#[derive(Serialize, Deserialize, PartialEq, Clone)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GuildInfoDto {
    pub guild_id: String,
    pub name: String,
    pub icon_hash: Option<String>,
    pub banner_hash: Option<String>,
    pub premium_tier: u8,
    pub premium_subscription_count: u64,
    pub approximate_member_count: u64,
    pub approximate_presence_count: u64,
}

/// Selectable channel for the settings form, already filtered to text-like
/// channel kinds and sorted by position.
#[derive(Serialize, Deserialize, PartialEq, Clone)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChannelOptionDto {
    pub id: String,
    pub name: String,
}

/// Selectable role for the settings form, sorted highest-position first.
#[derive(Serialize, Deserialize, PartialEq, Clone)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RoleOptionDto {
    pub id: String,
    pub name: String,
}

/// Channel and role catalogs for one guild.
#[derive(Serialize, Deserialize, PartialEq, Clone)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GuildOptionsDto {
    pub channels: Vec<ChannelOptionDto>,
    pub roles: Vec<RoleOptionDto>,
}

impl ManagedGuildDto {
    /// CDN URL for the guild icon, if the guild has one.
    pub fn icon_url(&self) -> Option<String> {
        self.icon_hash.as_ref().map(|hash| {
            format!(
                "https://cdn.discordapp.com/icons/{}/{}.png",
                self.guild_id, hash
            )
        })
    }
}

impl GuildInfoDto {
    pub fn icon_url(&self) -> Option<String> {
        self.icon_hash.as_ref().map(|hash| {
            format!(
                "https://cdn.discordapp.com/icons/{}/{}.png",
                self.guild_id, hash
            )
        })
    }
}
